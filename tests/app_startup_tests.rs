use std::env;

use ghstar::app::App;
use ghstar::cli::Cli;
use serial_test::serial;

fn clear_credentials() {
    unsafe {
        env::remove_var("GH_UNAME");
        env::remove_var("GH_TOKEN");
    }
}

#[tokio::test]
#[serial]
async fn test_run_without_credentials_fails_before_any_network_call() {
    clear_credentials();

    let cli = Cli {
        repo: "gokulsoumya/ghstar".to_string(),
        interactive: false,
        search_count: 5,
    };

    let res = App::run(cli).await;
    assert!(res.is_err());
    let msg = res.unwrap_err().to_string();
    assert!(msg.contains("GH_UNAME") || msg.contains("GH_TOKEN"));
}

#[tokio::test]
#[serial]
async fn test_run_without_token_fails() {
    clear_credentials();
    unsafe {
        env::set_var("GH_UNAME", "octocat");
    }

    let cli = Cli {
        repo: "gokulsoumya/ghstar".to_string(),
        interactive: false,
        search_count: 5,
    };

    let res = App::run(cli).await;
    assert!(res.is_err());
    assert!(res.unwrap_err().to_string().contains("GH_TOKEN"));
    clear_credentials();
}
