use clap::{Parser, Subcommand};
use dasa_core::{
    MAX_DASA_LEVEL, PathLevel, ReferencePoint, active_path, datetime_to_jd, format_jd,
    full_schedule,
};

#[derive(Parser)]
#[command(name = "dasa", about = "Vimshottari dasa period calculator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Active dasa period chain at a query date
    Path {
        /// Birth datetime (YYYY-MM-DDThh:mm:ssZ)
        #[arg(long)]
        birth: String,
        /// Moon nakshatra at birth (1-27)
        #[arg(long)]
        nakshatra: u8,
        /// Percentage of the nakshatra traversed (0-100)
        #[arg(long)]
        percent: f64,
        /// Query datetime (YYYY-MM-DDThh:mm:ssZ)
        #[arg(long)]
        query: String,
        /// Maximum dasa depth (0-4, default 4)
        #[arg(long, default_value = "4")]
        depth: u8,
    },
    /// Full 120-year dasa schedule with bhuktis
    Schedule {
        /// Birth datetime (YYYY-MM-DDThh:mm:ssZ)
        #[arg(long)]
        birth: String,
        /// Moon nakshatra at birth (1-27)
        #[arg(long)]
        nakshatra: u8,
        /// Percentage of the nakshatra traversed (0-100)
        #[arg(long)]
        percent: f64,
    },
}

/// Parse "YYYY-MM-DDThh:mm:ssZ" or "YYYY-MM-DDThh:mm:ss" into a JD.
fn parse_jd(s: &str) -> Result<f64, String> {
    let s = s.trim_end_matches('Z');
    let parts: Vec<&str> = s.split('T').collect();
    if parts.len() != 2 {
        return Err(format!("expected YYYY-MM-DDThh:mm:ssZ, got {s}"));
    }
    let date_parts: Vec<&str> = parts[0].split('-').collect();
    let time_parts: Vec<&str> = parts[1].split(':').collect();
    if date_parts.len() != 3 || time_parts.len() != 3 {
        return Err(format!("invalid date/time format: {s}"));
    }
    let year: i32 = date_parts[0].parse().map_err(|e| format!("{e}"))?;
    let month: u32 = date_parts[1].parse().map_err(|e| format!("{e}"))?;
    let day: u32 = date_parts[2].parse().map_err(|e| format!("{e}"))?;
    let hour: u32 = time_parts[0].parse().map_err(|e| format!("{e}"))?;
    let minute: u32 = time_parts[1].parse().map_err(|e| format!("{e}"))?;
    let second: f64 = time_parts[2].parse().map_err(|e| format!("{e}"))?;
    Ok(datetime_to_jd(year, month, day, hour, minute, second))
}

fn require_jd(s: &str) -> f64 {
    parse_jd(s).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    })
}

fn require_anchor(nakshatra: u8, percent: f64, birth_jd: f64) -> ReferencePoint {
    ReferencePoint::from_nakshatra(nakshatra, percent, birth_jd).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    })
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Path {
            birth,
            nakshatra,
            percent,
            query,
            depth,
        } => {
            let birth_jd = require_jd(&birth);
            let query_jd = require_jd(&query);
            let anchor = require_anchor(nakshatra, percent, birth_jd);
            let path = active_path(&anchor, query_jd, depth.min(MAX_DASA_LEVEL));

            println!("Active dasa path at {} for birth {}\n", query, birth);
            for entry in &path.levels {
                let indent = "  ".repeat(entry.level() as usize);
                match entry {
                    PathLevel::Resolved {
                        period,
                        elapsed_fraction,
                    } => {
                        println!(
                            "{}{}: {} ({} - {}, {:.1}% elapsed)",
                            indent,
                            period.level.name(),
                            period.lord.english_name(),
                            format_jd(period.start_jd),
                            format_jd(period.end_jd),
                            elapsed_fraction * 100.0
                        );
                    }
                    PathLevel::Unknown { level } => {
                        println!("{}{}: Unknown", indent, level.name());
                    }
                }
            }
        }
        Commands::Schedule {
            birth,
            nakshatra,
            percent,
        } => {
            let birth_jd = require_jd(&birth);
            let anchor = require_anchor(nakshatra, percent, birth_jd);
            let schedule = full_schedule(&anchor);

            println!(
                "Vimshottari schedule for birth {} (birth dasa {}, balance {:.2}y)\n",
                birth,
                schedule.birth_lord.english_name(),
                schedule.balance_years
            );
            for maha in &schedule.maha_dasas {
                let marker = if maha.contains_reference { " *" } else { "" };
                println!(
                    "{:<8} {} - {} ({:.0}y){}",
                    maha.period.lord.english_name(),
                    format_jd(maha.period.start_jd),
                    format_jd(maha.period.end_jd),
                    maha.period.duration_years(),
                    marker
                );
                for sub in &maha.sub_periods {
                    let marker = if sub.contains_reference { " *" } else { "" };
                    println!(
                        "  {:<8} {} - {} ({:.2}y){}",
                        sub.period.lord.english_name(),
                        format_jd(sub.period.start_jd),
                        format_jd(sub.period.end_jd),
                        sub.period.duration_years(),
                        marker
                    );
                }
            }
        }
    }
}
