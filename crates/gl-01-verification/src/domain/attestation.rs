//! Deterministic attestation hash
//!
//! The attestation binds a project's id and claimed reduction to the agent
//! tons and final tons of its verification. It is not a cryptographic hash:
//! it is a 32-bit multiply-shift rolling hash over a fixed-shape JSON payload,
//! rendered as 8 hex digits repeated four times.

use super::format::format_number;
use super::{VerificationError, VerificationResult};

/// Literal prefix of every attestation hash.
pub const ATTESTATION_PREFIX: &str = "0xattestation_";

/// Literal prefix of every mint transaction hash.
pub const MINT_PREFIX: &str = "0xmint_";

/// Inputs bound by an attestation hash.
#[derive(Debug, Clone, PartialEq)]
pub struct AttestationInput<'a> {
    pub project_id: &'a str,
    pub claimed_reduction: f64,
    pub agent_tons: &'a [i64],
    pub final_verified_tons: i64,
}

/// Serialize the inputs into the fixed-shape payload
/// `{"id":…,"claimed":…,"agents":[…],"final":…}`.
///
/// Field order and number layout are part of the hash input: integral
/// claims print without a fraction (`100`) and large or tiny ones keep
/// plain digits up to `1e21`.
pub fn attestation_payload(input: &AttestationInput<'_>) -> VerificationResult<String> {
    let id = serde_json::to_string(input.project_id)
        .map_err(|e| VerificationError::Encoding(e.to_string()))?;
    let claimed = format_number(input.claimed_reduction).ok_or_else(|| {
        VerificationError::Encoding(format!("non-finite number {}", input.claimed_reduction))
    })?;
    let agents = input
        .agent_tons
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(",");

    Ok(format!(
        r#"{{"id":{id},"claimed":{claimed},"agents":[{agents}],"final":{}}}"#,
        input.final_verified_tons
    ))
}

/// 32-bit rolling hash: `hash = (hash << 5) - hash + unit` over UTF-16 units.
pub fn rolling_hash(data: &str) -> i32 {
    data.encode_utf16().fold(0i32, |hash, unit| {
        hash.wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit))
    })
}

/// Render a rolling hash as a prefixed attestation string.
pub fn render_attestation(hash: i32) -> String {
    let hex = format!("{:08x}", i64::from(hash).abs());
    format!("{ATTESTATION_PREFIX}{hex}{hex}{hex}{hex}")
}

/// Compute the attestation hash for a verification.
pub fn attestation_hash(input: &AttestationInput<'_>) -> VerificationResult<String> {
    let payload = attestation_payload(input)?;
    Ok(render_attestation(rolling_hash(&payload)))
}

/// Mint transaction hash derived from an attestation hash.
pub fn mint_tx_hash(attestation: &str) -> String {
    let body = attestation
        .strip_prefix(ATTESTATION_PREFIX)
        .unwrap_or(attestation);
    format!("{MINT_PREFIX}{body}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_shape() {
        let input = AttestationInput {
            project_id: "proj-sample-001",
            claimed_reduction: 100.0,
            agent_tons: &[98, 89, 100],
            final_verified_tons: 86,
        };
        assert_eq!(
            attestation_payload(&input).unwrap(),
            r#"{"id":"proj-sample-001","claimed":100,"agents":[98,89,100],"final":86}"#
        );
    }

    #[test]
    fn test_fractional_claim_keeps_decimals() {
        let input = AttestationInput {
            project_id: "x",
            claimed_reduction: 250.5,
            agent_tons: &[229, 235, 243],
            final_verified_tons: 235,
        };
        assert_eq!(
            attestation_payload(&input).unwrap(),
            r#"{"id":"x","claimed":250.5,"agents":[229,235,243],"final":235}"#
        );
        assert_eq!(
            attestation_hash(&input).unwrap(),
            "0xattestation_31bc6a1431bc6a1431bc6a1431bc6a14"
        );
    }

    #[test]
    fn test_claim_numbers_keep_plain_digits() {
        let payload = |claimed: f64| {
            attestation_payload(&AttestationInput {
                project_id: "p",
                claimed_reduction: claimed,
                agent_tons: &[1, 2, 3],
                final_verified_tons: 2,
            })
            .unwrap()
        };

        assert_eq!(
            payload(0.000001),
            r#"{"id":"p","claimed":0.000001,"agents":[1,2,3],"final":2}"#
        );
        assert_eq!(
            payload(1e17),
            r#"{"id":"p","claimed":100000000000000000,"agents":[1,2,3],"final":2}"#
        );
        assert_eq!(
            payload(1.2345678901234568e20),
            r#"{"id":"p","claimed":123456789012345680000,"agents":[1,2,3],"final":2}"#
        );
        assert_eq!(
            payload(1e21),
            r#"{"id":"p","claimed":1e+21,"agents":[1,2,3],"final":2}"#
        );
    }

    #[test]
    fn test_non_finite_claim_rejected() {
        let input = AttestationInput {
            project_id: "p",
            claimed_reduction: f64::NAN,
            agent_tons: &[1, 2, 3],
            final_verified_tons: 2,
        };
        assert!(matches!(
            attestation_payload(&input),
            Err(VerificationError::Encoding(_))
        ));
    }

    #[test]
    fn test_known_hashes() {
        let cases: [(&str, f64, [i64; 3], i64, &str); 3] = [
            (
                "proj-sample-001",
                100.0,
                [98, 89, 100],
                86,
                "0xattestation_71c9ee1071c9ee1071c9ee1071c9ee10",
            ),
            (
                "test-project-123",
                500.0,
                [488, 445, 477],
                470,
                "0xattestation_7985f5607985f5607985f5607985f560",
            ),
            (
                "proj-a",
                1000.0,
                [950, 907, 977],
                848,
                "0xattestation_240a375b240a375b240a375b240a375b",
            ),
        ];

        for (id, claimed, tons, final_tons, expected) in cases {
            let input = AttestationInput {
                project_id: id,
                claimed_reduction: claimed,
                agent_tons: &tons,
                final_verified_tons: final_tons,
            };
            assert_eq!(attestation_hash(&input).unwrap(), expected, "project {id}");
        }
    }

    #[test]
    fn test_rolling_hash_small_inputs() {
        assert_eq!(rolling_hash(""), 0);
        assert_eq!(rolling_hash("a"), 97);
        assert_eq!(rolling_hash("ab"), 97 * 31 + 98);
    }

    #[test]
    fn test_render_pads_and_takes_absolute_value() {
        assert_eq!(
            render_attestation(97),
            "0xattestation_00000061000000610000006100000061"
        );
        assert_eq!(render_attestation(-97), render_attestation(97));
        assert_eq!(
            render_attestation(i32::MIN),
            "0xattestation_80000000800000008000000080000000"
        );
    }

    #[test]
    fn test_id_is_json_escaped() {
        let input = AttestationInput {
            project_id: "quote\"id",
            claimed_reduction: 1.0,
            agent_tons: &[1, 1, 1],
            final_verified_tons: 1,
        };
        let payload = attestation_payload(&input).unwrap();
        assert!(payload.starts_with(r#"{"id":"quote\"id","#));
    }

    #[test]
    fn test_mint_hash_strips_prefix() {
        assert_eq!(
            mint_tx_hash("0xattestation_240a375b240a375b240a375b240a375b"),
            "0xmint_240a375b240a375b240a375b240a375b"
        );
    }
}
