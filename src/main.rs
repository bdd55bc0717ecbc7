use clap::Parser;

use jpx_lens::{chain, cli, example, journal, participants, schema, trend};

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    match cli.command {
        cli::Command::Chain {
            file,
            step,
            format,
            output,
        } => chain::run(&chain::ChainConfig {
            file,
            step,
            format,
            output,
        }),
        cli::Command::Trend {
            file,
            series,
            group_by,
            last,
        } => trend::run(&trend::TrendConfig {
            file,
            series,
            group_by,
            last,
        }),
        cli::Command::Participants { file, top } => {
            participants::run(&participants::ParticipantsConfig { file, top })
        }
        cli::Command::Journal { state_file, action } => {
            let action = match action {
                cli::JournalAction::Add { date, pnl, note } => {
                    journal::JournalAction::Add { date, pnl, note }
                }
                cli::JournalAction::Summary { month } => {
                    journal::JournalAction::Summary { month }
                }
                cli::JournalAction::Export { output } => {
                    journal::JournalAction::Export { output }
                }
            };
            journal::run(&state_file, &action)
        }
        cli::Command::Example => example::run(),
        cli::Command::Schema => schema::run(),
    }
}
