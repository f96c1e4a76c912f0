use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use clap::{Args, Parser, Subcommand};
use nadi_lunar::tropical_longitude;
use nadi_rs::{
    BirthDetails, Calculator, CalculatorConfig, CivilMoment, NadiResult, Person,
    estimate_offset_from_longitude, parse_utc_offset, validate_coordinates,
};
use nadi_time::jd_to_centuries;
use nadi_vedic_base::{Ayanamsha, nakshatra_from_longitude};

#[derive(Parser)]
#[command(name = "nadi", version, about = "Nakshatra, pada and nadi from birth details")]
struct Cli {
    /// JSON calculator config (offset_policy, validate_input, min_year, max_year)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone)]
struct Birth {
    /// Local birth date (YYYY-MM-DD)
    #[arg(long)]
    date: String,
    /// Local birth time (HH:MM, 24-hour)
    #[arg(long)]
    time: String,
    /// UTC offset in hours, decimal or ±HH:MM; estimated from --lon when omitted
    #[arg(long, allow_hyphen_values = true)]
    offset: Option<String>,
    /// Latitude in degrees north
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    lat: f64,
    /// Longitude in degrees east
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    lon: f64,
    /// Place of birth
    #[arg(long)]
    place: Option<String>,
}

impl Birth {
    fn details(&self) -> anyhow::Result<BirthDetails> {
        let offset = match &self.offset {
            Some(text) => text.clone(),
            None => {
                validate_coordinates(self.lat, self.lon)
                    .context("cannot estimate a UTC offset; pass --offset")?;
                let estimate = estimate_offset_from_longitude(self.lon);
                tracing::debug!(lon = self.lon, estimate, "no offset given, estimating from longitude");
                estimate.to_string()
            }
        };
        let details = BirthDetails::new(&self.date, &self.time, offset).with_location(self.lat, self.lon);
        Ok(match &self.place {
            Some(place) => details.with_place(place),
            None => details,
        })
    }

    fn moment(&self) -> anyhow::Result<CivilMoment> {
        let details = self.details()?;
        let Some(offset) = parse_utc_offset(&details.timezone) else {
            bail!("unparseable UTC offset {:?}", details.timezone);
        };
        Ok(CivilMoment::parse(&details.birth_date, &details.birth_time, offset)?)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Nakshatra, pada and nadi for one birth
    Calculate {
        #[command(flatten)]
        birth: Birth,
        /// Print the result record as JSON
        #[arg(long)]
        json: bool,
    },
    /// Nadi dosha check for two people, or a summary for one
    Compare {
        /// Name of the first person
        #[arg(long)]
        name1: Option<String>,
        /// First person's date (YYYY-MM-DD)
        #[arg(long)]
        date1: String,
        /// First person's time (HH:MM)
        #[arg(long)]
        time1: String,
        /// First person's UTC offset
        #[arg(long, allow_hyphen_values = true)]
        offset1: String,
        /// Name of the second person
        #[arg(long)]
        name2: Option<String>,
        /// Second person's date (YYYY-MM-DD)
        #[arg(long, requires_all = ["time2", "offset2"])]
        date2: Option<String>,
        /// Second person's time (HH:MM)
        #[arg(long)]
        time2: Option<String>,
        /// Second person's UTC offset
        #[arg(long, allow_hyphen_values = true)]
        offset2: Option<String>,
        /// Print the comparison as JSON
        #[arg(long)]
        json: bool,
    },
    /// Julian Date (UT) of a local birth moment
    JulianDate {
        #[command(flatten)]
        birth: Birth,
    },
    /// Tropical longitude of the Moon at a local birth moment
    Moon {
        #[command(flatten)]
        birth: Birth,
    },
    /// Lahiri ayanamsha at a Julian Date
    Ayanamsha {
        /// Julian Date (UT)
        #[arg(long)]
        jd: f64,
    },
    /// Nakshatra, pada and nadi from sidereal longitude
    Nakshatra {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_hyphen_values = true)]
        lon: f64,
    },
}

fn load_config(path: Option<&Path>) -> anyhow::Result<CalculatorConfig> {
    let Some(path) = path else {
        return Ok(CalculatorConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    CalculatorConfig::from_json_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

fn print_result(r: &NadiResult) {
    println!(
        "{} (index {}) - Pada {} - {} Nadi",
        r.nakshatra, r.nakshatra_index, r.pada, r.nadi
    );
    println!("  JD (UT)            : {:.6}", r.julian_date);
    println!("  Tropical longitude : {:.6} deg", r.tropical_longitude);
    println!("  Ayanamsha (Lahiri) : {:.6} deg", r.ayanamsha);
    println!("  Sidereal longitude : {:.6} deg", r.sidereal_longitude);
    if r.offset_defaulted {
        println!("  UTC offset         : 0 (unparseable input, defaulted)");
    } else {
        println!("  UTC offset         : {} h", r.utc_offset_hours);
    }
    println!("  Accuracy           : {}", r.accuracy);
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Calculate { birth, json } => {
            let calc = Calculator::new(load_config(cli.config.as_deref())?)?;
            let result = calc.calculate(&birth.details()?)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&result.to_record())?);
            } else {
                print_result(&result);
            }
        }

        Commands::Compare {
            name1,
            date1,
            time1,
            offset1,
            name2,
            date2,
            time2,
            offset2,
            json,
        } => {
            let calc = Calculator::new(load_config(cli.config.as_deref())?)?;
            let p1 = Person {
                name: name1,
                details: BirthDetails::new(date1, time1, offset1),
            };
            let p2 = match (date2, time2, offset2) {
                (Some(date), Some(time), Some(offset)) => Some(Person {
                    name: name2,
                    details: BirthDetails::new(date, time, offset),
                }),
                (None, None, None) => None,
                _ => bail!("--date2, --time2 and --offset2 must be given together"),
            };
            let outcome = calc.compare(&p1, p2.as_ref())?;
            if json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                println!("{}", outcome.message);
            }
        }

        Commands::JulianDate { birth } => {
            let utc = birth.moment()?.to_utc();
            println!("{utc}  JD {:.6}", utc.to_jd());
        }

        Commands::Moon { birth } => {
            let jd = birth.moment()?.to_jd();
            let lon = tropical_longitude(jd_to_centuries(jd));
            println!("Moon tropical longitude: {lon:.6} deg (JD {jd:.6})");
        }

        Commands::Ayanamsha { jd } => {
            let aya = Ayanamsha::lahiri(jd);
            println!(
                "Lahiri ayanamsha: {:.6} deg (secular {:.6}, nutation {:+.6})",
                aya.total_deg(),
                aya.secular_deg,
                aya.nutation_deg
            );
        }

        Commands::Nakshatra { lon } => {
            let info = nakshatra_from_longitude(lon);
            println!(
                "{} (index {}) - Pada {} - {} Nadi ({:.4} deg in nakshatra, {:.4} deg in pada)",
                info.nakshatra,
                info.nakshatra_index,
                info.pada,
                info.nakshatra.nadi(),
                info.degrees_in_nakshatra,
                info.degrees_in_pada
            );
        }
    }

    Ok(())
}
