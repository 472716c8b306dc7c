//! The process-wide slot is shared by every test in a binary, so the whole
//! lifecycle runs in one test.

use chain_params::{params, select_params, try_params, ChainArgs, ChainParamsError, REGTEST};

#[test]
fn test_global_selection_lifecycle() {
    assert_eq!(try_params(), Err(ChainParamsError::NotSelected));
    assert!(std::panic::catch_unwind(params).is_err());

    let selected = select_params(REGTEST, &ChainArgs::new()).unwrap();
    assert_eq!(selected.network_id(), "regtest");
    assert!(std::ptr::eq(selected, params()));
    assert_eq!(try_params().unwrap().network_id(), "regtest");

    assert!(matches!(
        select_params("main", &ChainArgs::new()),
        Err(ChainParamsError::AlreadySelected { active }) if active == "regtest"
    ));
    assert_eq!(params().network_id(), "regtest");
}
