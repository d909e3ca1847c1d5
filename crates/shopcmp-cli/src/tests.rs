use super::*;

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["shopcmp"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
    assert!(!cli.guest);
}

#[test]
fn parses_multi_word_search() {
    let cli = Cli::try_parse_from(["shopcmp", "search", "iphone", "15"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Search { ref query }) if query.join(" ") == "iphone 15"
    ));
}

#[test]
fn search_requires_query() {
    assert!(Cli::try_parse_from(["shopcmp", "search"]).is_err());
}

#[test]
fn guest_flag_is_global() {
    let cli = Cli::try_parse_from(["shopcmp", "search", "tv", "--guest"]).unwrap();
    assert!(cli.guest);

    let cli = Cli::try_parse_from(["shopcmp", "--guest", "product", "42"]).unwrap();
    assert!(cli.guest);
    assert!(matches!(
        cli.command,
        Some(Commands::Product { ref id }) if id.as_str() == "42"
    ));
}

#[test]
fn reviews_page_defaults_to_one() {
    let cli = Cli::try_parse_from(["shopcmp", "reviews", "42"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Reviews { page: 1, .. })
    ));

    let cli = Cli::try_parse_from(["shopcmp", "reviews", "42", "--page", "3"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Reviews { page: 3, .. })
    ));
}

#[test]
fn compare_collects_ids_and_language() {
    let cli =
        Cli::try_parse_from(["shopcmp", "compare", "1", "2", "3", "--lang", "vi"]).unwrap();
    match cli.command {
        Some(Commands::Compare { ids, lang }) => {
            let ids: Vec<&str> = ids.iter().map(ProductId::as_str).collect();
            assert_eq!(ids, ["1", "2", "3"]);
            assert_eq!(lang, Some(Language::Vi));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn compare_rejects_unknown_language() {
    assert!(Cli::try_parse_from(["shopcmp", "compare", "1", "2", "--lang", "fr"]).is_err());
}

#[test]
fn login_takes_password_flag() {
    let cli = Cli::try_parse_from(["shopcmp", "login", "anh", "--password", "pw"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Login { ref username, ref password }) if username == "anh" && password == "pw"
    ));
}

#[test]
fn signup_full_name_is_optional() {
    let cli = Cli::try_parse_from([
        "shopcmp",
        "signup",
        "--email",
        "anh@example.com",
        "--username",
        "anh",
        "--password",
        "pw",
    ])
    .unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Signup { full_name: None, .. })
    ));
}

#[test]
fn gate_adds_landing_hint() {
    let err = gate(Err(SessionError::Forbidden {
        action: "comparing products",
    }))
    .unwrap_err();
    assert!(err.to_string().contains("--guest"));
    assert!(gate(Ok(())).is_ok());
}
