use anyhow::Context;
use clap::Parser;
use details_store::{cli, commands, config, menu, RecordStore};
use cli::{Cli, Commands};
use config::Config;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let config = Config::load_or_default();
    let data_file = config.resolve_data_file(cli.file.clone());
    log::info!("data file: {}", data_file.display());
    let store = RecordStore::new(data_file);
    let mut out = std::io::stdout();

    let outcome = match cli.command {
        None | Some(Commands::Menu) => {
            let result = if menu::is_interactive() {
                menu::run_menu(&store, &mut menu::TerminalPrompter, &mut out)
            } else {
                let mut prompter =
                    menu::LinePrompter::new(std::io::stdin().lock(), std::io::stdout());
                menu::run_menu(&store, &mut prompter, &mut out)
            };
            return result.context("interactive menu aborted");
        }

        Some(Commands::Show) => commands::display_contents(&store, &mut out),

        Some(Commands::Add { record }) => commands::add_record(&store, &record, &mut out),

        Some(Commands::Delete { index }) => commands::delete_at(&store, index, &mut out),

        Some(Commands::Search { field, value, json, save }) => {
            let value = commands::parse_search_value(&value, json);
            let save_to = save.then(|| config.results_file.clone());
            commands::search_records(&store, &field, &value, save_to.as_deref(), &mut out)
                .map(|_| ())
        }

        Some(Commands::WeekCost { date }) => {
            commands::weekly_cost(&store, &date, &mut out).map(|_| ())
        }

        Some(Commands::Config { set_data_file, set_results_file, show }) => {
            // 書き換える場合は壊れた設定をデフォルトで上書きしない
            let mut config = if set_data_file.is_some() || set_results_file.is_some() {
                Config::load().context("failed to load configuration")?
            } else {
                config
            };

            if let Some(path) = set_data_file {
                config.set_data_file(path)?;
                println!("✔ data file set");
            }

            if let Some(path) = set_results_file {
                config.set_results_file(path)?;
                println!("✔ results file set");
            }

            if show {
                println!("Config:");
                println!("  path: {}", Config::config_path()?.display());
                println!("  data file: {}", config.data_file.display());
                println!("  results file: {}", config.results_file.display());
            }
            Ok(())
        }
    };

    if let Err(e) = outcome {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    Ok(())
}
