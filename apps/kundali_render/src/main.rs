use anyhow::Context;
use clap::Parser;
use kundali::bnn::{self, BnnEvent, EventFilter};
use kundali::chart::{parse_dasha_periods, summary};
use kundali::rendering::{to_svg, ChartSpecGenerator};
use kundali::resolver::{reconcile_placements, verify_house_table};
use kundali::{KundaliResponse, NorthIndianLayout, SouthIndianLayout};
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Chart JSON as returned by the kundali service.
    #[arg(long)]
    chart: PathBuf,

    /// Output directory for north.svg / south.svg.
    #[arg(long, default_value = "target/kundali")]
    out_dir: PathBuf,

    /// Settings file (otherwise configs/kundali.toml, or built-in defaults).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Optional BNN transit event list (JSON array).
    #[arg(long)]
    events: Option<PathBuf>,

    /// Only list events whose target planet matches.
    #[arg(long)]
    planet: Option<String>,

    /// Only list events touching this triangle, e.g. "1/5/9".
    #[arg(long)]
    triangle: Option<String>,

    /// Optional dasha period list (JSON array from the dasha service).
    #[arg(long)]
    dasha: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let settings = match &args.config {
        Some(path) => kundali_config::load_chart_settings_from(path)?,
        None => kundali_config::load_chart_settings()?,
    };

    let text = fs::read_to_string(&args.chart)
        .with_context(|| format!("failed to read chart {}", args.chart.display()))?;
    let chart = KundaliResponse::from_json(&text)?;
    let ascendant = chart.ascendant_sign();

    if let Some(asc) = ascendant {
        let mismatches = reconcile_placements(asc, &chart.planets);
        let house_mismatches = verify_house_table(asc, &chart.houses);
        if !mismatches.is_empty() || !house_mismatches.is_empty() {
            println!(
                "{} placement and {} house-table inconsistencies (see log)",
                mismatches.len(),
                house_mismatches.len()
            );
        }
    }

    let generator = ChartSpecGenerator::with_settings(settings);
    let north = NorthIndianLayout::build_with_grid(
        ascendant,
        &chart.planets,
        (&generator.settings().north).into(),
    );
    let south = SouthIndianLayout::build_with_geometry(
        ascendant,
        &chart.planets,
        (&generator.settings().south).into(),
    );

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("failed to create {}", args.out_dir.display()))?;
    let specs = [
        ("north.svg", generator.north(&north)),
        ("south.svg", generator.south(&south)),
    ];
    for (name, spec) in specs {
        let path = args.out_dir.join(name);
        fs::write(&path, to_svg(&spec))
            .with_context(|| format!("failed to write {}", path.display()))?;
        log::info!("Wrote {}", path.display());
    }

    println!("{}", summary::ascendant_line(&chart));
    println!("Planets");
    for row in summary::planet_rows(&chart.planets) {
        println!("  {row}");
    }
    if !chart.houses.is_empty() {
        println!("Houses");
        for row in summary::house_rows(&chart.houses) {
            println!("  {row}");
        }
    }

    println!("BNN directional grouping");
    for group in bnn::group_planets(&chart.planets) {
        println!("  {} - {}", group.triad, group.triad.meaning());
        if group.is_empty() {
            println!("    No planets");
        }
        for p in &group.planets {
            println!("    {} ({:.2}°)  House {} ({})", p.planet, p.degree, p.house_no, p.sign);
        }
    }

    if let Some(path) = &args.events {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read events {}", path.display()))?;
        let events: Vec<BnnEvent> = serde_json::from_str(&text)
            .with_context(|| format!("failed to parse events {}", path.display()))?;
        let filter = EventFilter {
            planet: args.planet.clone(),
            triangle: args.triangle.clone(),
        };
        let matching = filter.apply(&events);
        println!("{} of {} events", matching.len(), events.len());
        for (year, year_events) in bnn::group_by_year(matching) {
            println!("{year}");
            for event in year_events {
                let groups: Vec<&str> = event.triangles.iter().map(|t| t.group.as_str()).collect();
                println!(
                    "  {}  {}  [{}]",
                    bnn::format_event_date(&event.date),
                    event.event,
                    groups.join(", ")
                );
                for triangle in &event.triangles {
                    println!("    {}", triangle.summary());
                }
            }
        }
    }

    if let Some(path) = &args.dasha {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read dasha periods {}", path.display()))?;
        let periods = parse_dasha_periods(&text)
            .with_context(|| format!("failed to parse dasha periods {}", path.display()))?;
        println!("Vimshottari dasha");
        if periods.is_empty() {
            println!("  No periods");
        }
        for period in &periods {
            let marker = if period.current { '*' } else { ' ' };
            println!("{marker} {}", summary::dasha_line(period));
        }
    }

    Ok(())
}
