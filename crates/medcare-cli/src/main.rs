//! MedCare CLI - ask the assistant and run the health tools from a shell.

use chrono::{DateTime, Local, NaiveTime, Utc};
use clap::{Parser, Subcommand};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use medcare_core::medicine::format_time_left;
use medcare_core::tools::{bmi, sleep_duration, ExpenseLedger, WaterTracker, MAX_GLASSES};
use medcare_core::{
    AlertOutcome, AssistantSession, CoreError, DailySchedule, DoseId, EmergencyNotifier,
    QUICK_ACTIONS,
};

/// MedCare CLI - health companion tools
#[derive(Parser)]
#[command(name = "medcare")]
#[command(about = "CLI for the MedCare health companion", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask the assistant a single question
    Ask {
        /// Name the assistant addresses you by
        #[arg(short, long, default_value = "John")]
        name: String,

        /// Print the reply as JSON
        #[arg(long)]
        json: bool,

        /// What to ask
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// List the quick action prompts
    #[command(name = "quick-actions")]
    QuickActions,

    /// Body mass index calculator
    Bmi {
        /// Height in centimetres
        #[arg(long)]
        height: f64,

        /// Weight in kilograms
        #[arg(long)]
        weight: f64,
    },

    /// Time asleep between bedtime and wake-up
    Sleep {
        /// Bedtime (HH:MM)
        #[arg(long, value_parser = parse_hhmm)]
        bedtime: NaiveTime,

        /// Wake-up time (HH:MM)
        #[arg(long, value_parser = parse_hhmm)]
        wakeup: NaiveTime,
    },

    /// Daily water intake progress
    Water {
        /// Glasses drunk so far
        #[arg(long, default_value = "4")]
        glasses: u32,

        /// Daily target in glasses
        #[arg(long, default_value = "8")]
        target: u32,

        /// Glasses to add now
        #[arg(long, default_value = "0")]
        add: u32,

        /// Glasses to take back
        #[arg(long, default_value = "0")]
        remove: u32,
    },

    /// Today's medicine schedule
    Medicines {
        /// Time to compute the next dose from (HH:MM, defaults to now)
        #[arg(long, value_parser = parse_hhmm)]
        at: Option<NaiveTime>,

        /// Mark a dose as taken by its ID (repeatable)
        #[arg(long = "take", value_name = "ID")]
        take: Vec<u32>,
    },

    /// Medicine spending
    Expenses,
}

/// Records emergency alerts in the log, which the CLI writes to stderr.
struct StderrNotifier;

impl EmergencyNotifier for StderrNotifier {
    fn notify(&self, user_name: &str) -> Result<(), CoreError> {
        warn!(user = %user_name, "Emergency protocols activated");
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Ask { name, json, text } => {
            ask(name, json, &text.join(" "))?;
        }
        Commands::QuickActions => {
            quick_actions();
        }
        Commands::Bmi { height, weight } => {
            print_bmi(height, weight)?;
        }
        Commands::Sleep { bedtime, wakeup } => {
            println!("Sleep duration: {}", sleep_duration(bedtime, wakeup));
        }
        Commands::Water {
            glasses,
            target,
            add,
            remove,
        } => {
            water(glasses, target, add, remove);
        }
        Commands::Medicines { at, take } => {
            medicines(at.unwrap_or_else(|| Local::now().time()), &take)?;
        }
        Commands::Expenses => {
            expenses();
        }
    }

    Ok(())
}

fn ask(name: String, json: bool, text: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = AssistantSession::new(name).with_notifier(StderrNotifier);

    let reply = session
        .submit(text)
        .ok_or_else(|| CoreError::InvalidInput("nothing to ask".to_string()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&reply)?);
        return Ok(());
    }

    let category = reply.message.category().map(|c| c.as_str()).unwrap_or("-");
    let emotion = reply
        .message
        .emotion()
        .map(|e| e.to_string())
        .unwrap_or_else(|| "-".to_string());

    println!("[{} / {}]", category, emotion);
    println!("{}", reply.message.text());

    match reply.alert {
        Some(AlertOutcome::Sent) => {
            println!();
            println!("Emergency protocols activated. Emergency contacts have been notified.");
        }
        Some(AlertOutcome::Failed(reason)) => {
            println!();
            println!("Could not reach emergency contacts: {}", reason);
        }
        None => {}
    }

    Ok(())
}

fn quick_actions() {
    println!("Quick actions ({}):", QUICK_ACTIONS.len());
    for (i, action) in QUICK_ACTIONS.iter().enumerate() {
        println!("  {}. {}", i + 1, action);
    }
}

fn print_bmi(height: f64, weight: f64) -> Result<(), Box<dyn std::error::Error>> {
    let reading = bmi(height, weight)?;
    println!("BMI:       {:.1}", reading.value);
    println!("Category:  {}", reading.category);
    Ok(())
}

fn water(glasses: u32, target: u32, add: u32, remove: u32) {
    let mut tracker = WaterTracker::new(glasses, target);
    if let Some(notice) = adjust_water(&mut tracker, add, remove, Utc::now()) {
        println!("{}", notice);
    }

    println!(
        "Water: {}/{} glasses (max {})",
        tracker.current(),
        tracker.target(),
        MAX_GLASSES
    );
    println!("[{}] {}%", progress_bar(tracker.progress(), 20), tracker.progress());
}

/// Apply removals then additions, returning a notice if a bound was hit.
fn adjust_water(
    tracker: &mut WaterTracker,
    add: u32,
    remove: u32,
    now: DateTime<Utc>,
) -> Option<String> {
    let removed = (0..remove).take_while(|_| tracker.remove_glass()).count() as u32;
    let added = (0..add).take_while(|_| tracker.add_glass(now)).count() as u32;

    if added < add {
        Some(format!("Daily limit of {} glasses reached.", MAX_GLASSES))
    } else if removed < remove {
        Some("No glasses left to remove.".to_string())
    } else {
        None
    }
}

fn medicines(now: NaiveTime, take: &[u32]) -> Result<(), Box<dyn std::error::Error>> {
    let mut schedule = DailySchedule::sample();

    for id in take {
        let dose = schedule.mark_taken(DoseId::new(*id))?;
        println!("Marked {} ({}) as taken.", dose.name, dose.dosage);
    }

    println!(
        "Medicines ({}/{} taken, {}%):",
        schedule.taken_count(),
        schedule.doses().len(),
        schedule.completion_rate()
    );
    println!("{:<4}  {:<6}  {:<16}  {:<10}  {}", "ID", "TIME", "NAME", "DOSAGE", "STATUS");
    println!("{}", "-".repeat(54));

    for dose in schedule.doses() {
        let status = if dose.taken { "TAKEN" } else { "PENDING" };
        println!(
            "{:<4}  {:<6}  {:<16}  {:<10}  {}",
            dose.id.get(),
            dose.time.format("%H:%M"),
            dose.name,
            dose.dosage,
            status
        );
    }

    println!();
    match schedule.next_due(now) {
        Some((dose, left)) => {
            println!("Next: {} in {}", dose.name, format_time_left(left));
        }
        None => println!("All doses for today are done."),
    }

    let later: Vec<&str> = schedule
        .upcoming(now)
        .skip(1)
        .map(|d| d.name.as_str())
        .collect();
    if !later.is_empty() {
        println!("Later today: {}", later.join(", "));
    }

    Ok(())
}

fn expenses() {
    let ledger = ExpenseLedger::sample();

    println!("Expenses ({}):", ledger.expenses().len());
    println!("{:<12}  {:<16}  {:>8}", "DATE", "MEDICINE", "AMOUNT");
    println!("{}", "-".repeat(40));

    for expense in ledger.expenses() {
        println!(
            "{:<12}  {:<16}  {:>8}",
            expense.date.format("%Y-%m-%d"),
            expense.medicine,
            expense.amount
        );
    }

    println!("{}", "-".repeat(40));
    println!("{:<12}  {:<16}  {:>8}", "", "TOTAL", ledger.total());
    println!("As of {}", Utc::now().format("%Y-%m-%d"));
}

/// Parse a wall-clock time like `22:30`.
fn parse_hhmm(value: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .map_err(|_| format!("expected HH:MM, got '{}'", value))
}

fn progress_bar(percent: u8, width: usize) -> String {
    let filled = usize::from(percent.min(100)) * width / 100;
    format!("{}{}", "#".repeat(filled), "-".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hhmm() {
        assert_eq!(
            parse_hhmm("22:30"),
            Ok(NaiveTime::from_hms_opt(22, 30, 0).unwrap())
        );
        assert!(parse_hhmm("10pm").is_err());
        assert!(parse_hhmm("25:00").is_err());
    }

    #[test]
    fn test_progress_bar() {
        assert_eq!(progress_bar(50, 10), "#####-----");
        assert_eq!(progress_bar(100, 4), "####");
        assert_eq!(progress_bar(0, 4), "----");
    }

    #[test]
    fn test_adjust_water() {
        let now = Utc::now();

        let mut tracker = WaterTracker::new(4, 8);
        assert!(adjust_water(&mut tracker, 2, 0, now).is_none());
        assert_eq!(tracker.current(), 6);
        assert_eq!(tracker.log().len(), 2);

        let mut tracker = WaterTracker::new(11, 8);
        let notice = adjust_water(&mut tracker, 3, 0, now).unwrap();
        assert!(notice.contains("12"));
        assert_eq!(tracker.current(), MAX_GLASSES);

        let mut tracker = WaterTracker::new(1, 8);
        assert!(adjust_water(&mut tracker, 0, 2, now).is_some());
        assert_eq!(tracker.current(), 0);
    }

    #[test]
    fn test_medicines_take_unknown_dose_fails() {
        let at = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
        assert!(medicines(at, &[3]).is_ok());
        assert!(medicines(at, &[99]).is_err());
    }

    #[test]
    fn test_cli_parses_subcommands() {
        let cli = Cli::try_parse_from(["medcare", "ask", "--json", "chest", "pain"]).unwrap();
        match cli.command {
            Commands::Ask { name, json, text } => {
                assert_eq!(name, "John");
                assert!(json);
                assert_eq!(text.join(" "), "chest pain");
            }
            _ => panic!("expected ask"),
        }

        assert!(Cli::try_parse_from(["medcare", "sleep", "--bedtime", "23:00"]).is_err());

        let cli =
            Cli::try_parse_from(["medcare", "medicines", "--take", "3", "--take", "4"]).unwrap();
        match cli.command {
            Commands::Medicines { at, take } => {
                assert!(at.is_none());
                assert_eq!(take, vec![3, 4]);
            }
            _ => panic!("expected medicines"),
        }
    }
}
