use alloy::{
    primitives::{Address, Bytes},
    sol,
    sol_types::SolCall,
};

use crate::interface::FacetInterface;

// EIP-2535 diamondCut entry point. The action enum travels as uint8,
// which keeps the canonical selector 0x1f931c1c.
sol! {
    #[derive(Debug)]
    struct FacetCut {
        address facetAddress;
        uint8 action;
        bytes4[] functionSelectors;
    }

    #[derive(Debug)]
    function diamondCut(FacetCut[] _diamondCut, address _init, bytes _calldata) external;
}

/// Semantic effect of one cut entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum FacetCutAction {
    Add = 0,
    Replace = 1,
    Remove = 2,
}

/// Cut that deletes an interface's selectors from the routing table.
/// The facet address is the zero address: no implementation, drop routing.
pub fn remove_cut(iface: &FacetInterface) -> FacetCut {
    FacetCut {
        facetAddress: Address::ZERO,
        action: FacetCutAction::Remove as u8,
        functionSelectors: iface.selectors(),
    }
}

/// Cut that routes an interface's selectors to `facet`.
pub fn add_cut(facet: Address, iface: &FacetInterface) -> FacetCut {
    FacetCut {
        facetAddress: facet,
        action: FacetCutAction::Add as u8,
        functionSelectors: iface.selectors(),
    }
}

/// Cut that re-points an interface's selectors at `facet`.
pub fn replace_cut(facet: Address, iface: &FacetInterface) -> FacetCut {
    FacetCut {
        facetAddress: facet,
        action: FacetCutAction::Replace as u8,
        functionSelectors: iface.selectors(),
    }
}

/// Full calldata for the diamondCut entry point: the given cuts, a zero
/// init address and empty init calldata.
pub fn cut_calldata(cuts: Vec<FacetCut>) -> Vec<u8> {
    diamondCutCall {
        _diamondCut: cuts,
        _init: Address::ZERO,
        _calldata: Bytes::new(),
    }
    .abi_encode()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface::selector_of;
    use alloy::primitives::keccak256;

    #[test]
    fn diamond_cut_wire_selector() {
        assert_eq!(diamondCutCall::SELECTOR, [0x1f, 0x93, 0x1c, 0x1c]);
    }

    #[test]
    fn remove_cut_uses_zero_address_and_remove_action() {
        let iface = FacetInterface::new("ExchangeFacet", ["createOrder(address,uint256,uint256)"]);
        let cut = remove_cut(&iface);
        assert_eq!(cut.facetAddress, Address::ZERO);
        assert_eq!(cut.action, FacetCutAction::Remove as u8);
        assert_eq!(cut.functionSelectors, iface.selectors());
    }

    #[test]
    fn add_and_replace_point_at_the_facet() {
        let facet = Address::repeat_byte(0x42);
        let iface = FacetInterface::new("ExchangeFacet", ["feeBps()"]);

        let add = add_cut(facet, &iface);
        assert_eq!(add.facetAddress, facet);
        assert_eq!(add.action, FacetCutAction::Add as u8);

        let replace = replace_cut(facet, &iface);
        assert_eq!(replace.facetAddress, facet);
        assert_eq!(replace.action, FacetCutAction::Replace as u8);
    }

    #[test]
    fn remove_cut_for_two_function_interface() {
        let iface = FacetInterface::new("TestFacet", ["foo()", "bar(uint256)"]);
        let cut = remove_cut(&iface);
        assert_eq!(cut.functionSelectors.len(), 2);
        assert_eq!(
            cut.functionSelectors[0].as_slice(),
            &keccak256("foo()".as_bytes())[..4]
        );
        assert_eq!(
            cut.functionSelectors[1].as_slice(),
            &keccak256("bar(uint256)".as_bytes())[..4]
        );
        assert_eq!(cut.facetAddress, Address::ZERO);
        assert_eq!(cut.action, FacetCutAction::Remove as u8);
    }

    #[test]
    fn calldata_encodes_one_cut_with_zero_init() {
        let iface = FacetInterface::new("TestFacet", ["foo()", "bar(uint256)"]);
        let data = cut_calldata(vec![remove_cut(&iface)]);
        assert_eq!(&data[..4], diamondCutCall::SELECTOR.as_slice());

        let decoded = diamondCutCall::abi_decode(&data, true).unwrap();
        assert_eq!(decoded._diamondCut.len(), 1);
        assert_eq!(
            decoded._diamondCut[0].functionSelectors,
            vec![selector_of("foo()"), selector_of("bar(uint256)")]
        );
        assert_eq!(decoded._init, Address::ZERO);
        assert!(decoded._calldata.is_empty());
    }
}
