//! Diamond (EIP-2535) administration tooling: derive facet selectors and
//! submit routing-table cuts against a deployed diamond proxy.

pub mod cut;
pub mod interface;
pub mod remover;

pub use cut::{add_cut, cut_calldata, remove_cut, replace_cut, FacetCut, FacetCutAction};
pub use interface::{selector_of, FacetInterface, Selector};
pub use remover::{remove_facet, CutError};
