use std::collections::HashSet;

use alloy::primitives::{keccak256, FixedBytes};
use serde::{Deserialize, Serialize};

/// 4-byte function selector: the first 4 bytes of keccak256 of the
/// canonical signature.
pub type Selector = FixedBytes<4>;

/// Compute the selector for a canonical signature, e.g. "transfer(address,uint256)".
pub fn selector_of(signature: &str) -> Selector {
    let hash = keccak256(signature.as_bytes());
    Selector::from_slice(&hash[0..4])
}

/// A facet's interface: name plus canonical function signatures in
/// declaration order. Signatures carry no parameter names and no spaces,
/// same form the ABI uses for selector hashing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetInterface {
    pub name: String,
    pub functions: Vec<String>,
}

impl FacetInterface {
    pub fn new(
        name: impl Into<String>,
        functions: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            functions: functions.into_iter().map(Into::into).collect(),
        }
    }

    /// Selectors in declaration order. A repeated signature keeps its
    /// first position, so the result has one entry per distinct function.
    pub fn selectors(&self) -> Vec<Selector> {
        let mut seen = HashSet::new();
        let mut out = Vec::with_capacity(self.functions.len());
        for sig in &self.functions {
            let selector = selector_of(sig);
            if seen.insert(selector) {
                out.push(selector);
            }
        }
        out
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_selectors() {
        assert_eq!(
            hex::encode(selector_of("transfer(address,uint256)")),
            "a9059cbb"
        );
        assert_eq!(hex::encode(selector_of("balanceOf(address)")), "70a08231");
        assert_eq!(hex::encode(selector_of("deposit()")), "d0e30db0");
        assert_eq!(hex::encode(selector_of("withdraw(uint256)")), "2e1a7d4d");
    }

    #[test]
    fn selectors_preserve_declaration_order() {
        let iface = FacetInterface::new(
            "ExchangeFacet",
            ["cancelOrder(uint256)", "createOrder(address,uint256,uint256)"],
        );
        let selectors = iface.selectors();
        assert_eq!(selectors.len(), 2);
        assert_eq!(selectors[0], selector_of("cancelOrder(uint256)"));
        assert_eq!(
            selectors[1],
            selector_of("createOrder(address,uint256,uint256)")
        );
    }

    #[test]
    fn duplicate_signatures_collapse_to_first() {
        let iface = FacetInterface::new("DupFacet", ["foo()", "bar(uint256)", "foo()"]);
        let selectors = iface.selectors();
        assert_eq!(selectors.len(), 2);
        assert_eq!(selectors[0], selector_of("foo()"));
        assert_eq!(selectors[1], selector_of("bar(uint256)"));
    }

    #[test]
    fn interface_loads_from_json() {
        let raw = r#"{"name":"ExchangeFacet","functions":["fillOrder(uint256,uint256)"]}"#;
        let iface: FacetInterface = serde_json::from_str(raw).unwrap();
        assert_eq!(iface.name, "ExchangeFacet");
        assert!(!iface.is_empty());
        assert_eq!(
            iface.selectors(),
            vec![selector_of("fillOrder(uint256,uint256)")]
        );
    }
}
