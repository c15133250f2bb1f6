//! Argument parsing through clap

use clap::Parser;
use kewl::cli::{Cli, Commands, OutputFormat};

#[test]
fn test_parse_excerpt() {
    let cli = Cli::try_parse_from([
        "kewl", "--format", "json", "excerpt", "fox", "lazy dog", "-n", "3", "-w", "-t", "text",
    ])
    .unwrap();

    assert_eq!(cli.format, OutputFormat::Json);
    match cli.command {
        Commands::Excerpt(args) => {
            assert_eq!(args.phrases, vec!["fox", "lazy dog"]);
            assert_eq!(args.context_words, Some(3));
            assert!(args.matching.word_boundary);
            assert_eq!(args.input.text.as_deref(), Some("text"));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_global_options_after_subcommand() {
    let cli = Cli::try_parse_from(["kewl", "url", "/a", "--config", "k.toml", "-v"]).unwrap();
    assert!(cli.verbose);
    assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("k.toml")));
}

#[test]
fn test_conflicting_flags_are_rejected() {
    assert!(Cli::try_parse_from(["kewl", "hits", "a", "-i", "-c"]).is_err());
    assert!(Cli::try_parse_from(["kewl", "hits", "a", "-t", "x", "-f", "y"]).is_err());
}

#[test]
fn test_phrases_are_required() {
    assert!(Cli::try_parse_from(["kewl", "highlight"]).is_err());
}

#[test]
fn test_meta_namespace() {
    assert!(Cli::try_parse_from(["kewl", "meta", "og", "title", "Hi"]).is_ok());
    assert!(Cli::try_parse_from(["kewl", "meta", "facebook", "title", "Hi"]).is_err());
}

#[test]
fn test_show_config_name() {
    let cli = Cli::try_parse_from(["kewl", "show-config"]).unwrap();
    assert!(matches!(cli.command, Commands::ShowConfig(_)));
}
