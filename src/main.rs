use clap::Parser;

use autodiag::analyzer::Analyzer;
use autodiag::catalog::{diagnostic, vehicle};
use autodiag::cli::{Cli, Command};
use autodiag::config::Config;
use autodiag::report;
use autodiag::session::Session;
use autodiag::store::HistoryStore;

fn load_config(json_output: bool, verbose: bool) -> Config {
    match Config::load(json_output, verbose) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let mut session = Session::new();

    match cli.command {
        Command::Scan(args) => {
            let config = load_config(args.json, args.verbose);
            let mut store = HistoryStore::new(config.history_path.clone());
            let mut analyzer = match args.seed {
                Some(seed) => Analyzer::seeded(seed, config.analysis_delay),
                None => Analyzer::new(config.analysis_delay),
            };

            eprintln!("Analyzing image...");

            session.set_previous_page("/scan");
            let result = match analyzer.analyze(&mut store, &args.image) {
                Ok(result) => result,
                Err(e) => {
                    eprintln!("Analysis failed: {e}");
                    std::process::exit(1);
                }
            };
            session.set_current_scan(Some(result.scan_id.clone()));

            let count = result.detected_damages.len();
            eprintln!(
                "Analysis complete: {count} {} detected",
                if count == 1 { "issue" } else { "issues" }
            );

            // the result view re-reads the persisted scan by id
            let viewed = session
                .current_scan()
                .and_then(|id| store.find_by_id(id))
                .unwrap_or(result);

            report::print_scan(&viewed, &config);

            if config.verbose {
                eprintln!(
                    "session: came from {}, viewing scan {}",
                    session.previous_page(),
                    viewed.scan_id
                );
            }
        }
        Command::History(args) => {
            let config = load_config(args.json, args.verbose);
            let store = HistoryStore::new(config.history_path.clone());

            session.set_previous_page("/history");

            let listed = store.list();
            if let Some(warning) = &listed.warning {
                eprintln!("[diagnostic] {warning}");
            }

            report::print_history(&listed.scans, &config);
        }
        Command::Show(args) => {
            let config = load_config(args.json, args.verbose);
            let store = HistoryStore::new(config.history_path.clone());

            session.set_current_scan(Some(args.scan_id.clone()));

            match store.find_by_id(&args.scan_id) {
                Some(scan) => {
                    report::print_scan(&scan, &config);

                    if config.verbose {
                        eprintln!(
                            "session: came from {}, viewing scan {}",
                            session.previous_page(),
                            scan.scan_id
                        );
                    }
                }
                None => {
                    eprintln!(
                        "Scan {} not found. Run 'autodiag history' to list recorded scans.",
                        args.scan_id
                    );
                    std::process::exit(1);
                }
            }
        }
        Command::Remove(args) => {
            let config = load_config(false, false);
            let mut store = HistoryStore::new(config.history_path.clone());

            match store.remove(&args.scan_id) {
                Ok(()) => {
                    println!("Scan {} removed from history.", args.scan_id);
                }
                Err(e) => {
                    eprintln!("Error removing scan: {e}");
                    std::process::exit(1);
                }
            }
        }
        Command::Diagnostic(args) => {
            let record = diagnostic::lookup(&args.system_id);
            report::print_diagnostic(&record, args.json);
        }
        Command::Status(args) => {
            let status = diagnostic::vehicle_status();
            let summaries: Vec<_> = diagnostic::KNOWN_SYSTEMS
                .iter()
                .map(|id| diagnostic::lookup(id))
                .collect();

            report::print_status(&status, &summaries, args.json);
        }
        Command::Vehicle(args) => {
            report::print_vehicle(&vehicle::vehicle_info(), args.json);
        }
    }
}
