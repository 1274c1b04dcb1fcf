use anyhow::Context;
use ghstar::error::format_error_chain;

#[test]
fn test_format_error_chain_single_error() {
    let err = anyhow::anyhow!("something went wrong");
    assert_eq!(format_error_chain(&err), "something went wrong");
}

#[test]
fn test_format_error_chain_joins_contexts() {
    let err = anyhow::anyhow!("connection refused")
        .context("failed to reach api.github.com");
    let formatted = format_error_chain(&err);
    assert_eq!(
        formatted,
        "failed to reach api.github.com → connection refused"
    );
}

#[test]
fn test_format_error_chain_preserves_order() {
    let err: anyhow::Result<()> = Err(anyhow::anyhow!("inner"));
    let err = err.context("middle").context("outer").unwrap_err();
    assert_eq!(format_error_chain(&err), "outer → middle → inner");
}
