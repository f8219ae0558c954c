use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
}

/// Sleeper NFL player directory export
///
/// Downloads the full NFL player roster from the Sleeper API and writes
/// a player id to display name mapping to player_names.json in the
/// current directory, replacing any previous file.
///
/// Set RUST_LOG (e.g. RUST_LOG=sleeper_roster=debug) for more detailed logs on stderr.
#[derive(Parser, Debug)]
#[command(version, about, long_about)]
#[command(styles = get_styles())]
pub struct Args {}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_no_arguments_accepted() {
        assert!(Args::try_parse_from(["sleeper_roster"]).is_ok());
        assert!(Args::try_parse_from(["sleeper_roster", "--output", "x.json"]).is_err());
        assert!(Args::try_parse_from(["sleeper_roster", "extra"]).is_err());
    }
}
