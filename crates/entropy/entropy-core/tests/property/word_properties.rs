//! Property tests for the 256-bit word type.

use entropy_core::types::U256;
use proptest::prelude::*;

fn word() -> impl Strategy<Value = U256> {
    any::<[u8; 32]>().prop_map(U256::from_be_bytes)
}

proptest! {
    #[test]
    fn abs_diff_is_symmetric(a in word(), b in word()) {
        prop_assert_eq!(a.abs_diff(b), b.abs_diff(a));
    }

    #[test]
    fn abs_diff_matches_u128(a in any::<u128>(), b in any::<u128>()) {
        prop_assert_eq!(
            U256::from_u128(a).abs_diff(U256::from_u128(b)),
            U256::from_u128(a.abs_diff(b))
        );
    }

    #[test]
    fn ordering_matches_u128(a in any::<u128>(), b in any::<u128>()) {
        prop_assert_eq!(U256::from_u128(a).cmp(&U256::from_u128(b)), a.cmp(&b));
    }

    #[test]
    fn display_parses_back(w in word()) {
        prop_assert_eq!(w.to_string().parse::<U256>().unwrap(), w);
    }

    #[test]
    fn hex_parses_back(w in word()) {
        prop_assert_eq!(format!("{w:#x}").parse::<U256>().unwrap(), w);
    }

    #[test]
    fn json_string_form(w in word()) {
        let json = serde_json::to_string(&w).unwrap();
        prop_assert_eq!(json.clone(), format!("\"{w}\""));
        prop_assert_eq!(serde_json::from_str::<U256>(&json).unwrap(), w);
    }
}

#[test]
fn json_accepts_bare_integers() {
    assert_eq!(serde_json::from_str::<U256>("42").unwrap(), U256::from_u64(42));
    assert!(serde_json::from_str::<U256>("-1").is_err());
}
