use aimer_engine::constants::{MAX_TIME_MARKERS, TIME_STEP_S};
use aimer_engine::{
    compute_trajectory, parse_resolution, resolve_aim_vector, PhysicsParams, Trajectory,
};
use clap::{Parser, Subcommand, ValueEnum};
use nalgebra::Point2;
use serde::{Deserialize, Serialize};
use std::error::Error;

#[derive(Parser)]
#[command(name = "aimer")]
#[command(version = "0.1.0")]
#[command(about = "Projectile aim-assist trajectory calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the aim vector from an origin and a pointer position
    Vector {
        /// Launch origin x (px)
        #[arg(long)]
        origin_x: f64,

        /// Launch origin y (px)
        #[arg(long)]
        origin_y: f64,

        /// Pointer x (px)
        #[arg(long)]
        aim_x: f64,

        /// Pointer y (px)
        #[arg(long)]
        aim_y: f64,

        /// Drag distance mapping to 100% power (px)
        #[arg(short = 'r', long, default_value = "100.0")]
        max_radius: f64,
    },

    /// Compute the flight path and time markers for one aim
    Trajectory {
        /// Launch origin x (px)
        #[arg(long)]
        origin_x: f64,

        /// Launch origin y (px)
        #[arg(long)]
        origin_y: f64,

        /// Pointer x (px)
        #[arg(long)]
        aim_x: f64,

        /// Pointer y (px)
        #[arg(long)]
        aim_y: f64,

        /// Gravity (px/s²)
        #[arg(short = 'g', long, default_value = "9.8")]
        gravity: f64,

        /// Launch speed at 100% power (px/s)
        #[arg(short = 'v', long, default_value = "100.0")]
        max_velocity: f64,

        /// Drag distance mapping to 100% power (px)
        #[arg(short = 'r', long, default_value = "100.0")]
        max_radius: f64,

        /// Wind direction and magnitude (-10..=10, negative = leftward)
        #[arg(short = 'w', long, default_value = "0", allow_negative_numbers = true)]
        wind: i32,

        /// Horizontal acceleration per unit of wind magnitude (px/s²)
        #[arg(long, default_value = "0.0")]
        wind_accel: f64,

        /// Simulated seconds per displayed tick
        #[arg(short = 't', long, default_value = "1.0")]
        ticks_per_second: f64,

        /// Canvas resolution preset, WIDTHxHEIGHT
        #[arg(long, default_value = "1920x1440")]
        resolution: String,

        /// Print every Nth path point
        #[arg(long, default_value = "10")]
        sample_every: usize,

        /// Output format
        #[arg(short = 'o', long, default_value = "table")]
        output: OutputFormat,
    },

    /// Display engine information and defaults
    Info,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Csv,
    Table,
}

#[derive(Debug, Serialize, Deserialize)]
struct PathPoint {
    time: f64,
    x: f64,
    y: f64,
}

#[derive(Debug, Serialize, Deserialize)]
struct MarkerPoint {
    tick: usize,
    time: f64,
    x: f64,
    y: f64,
}

#[derive(Debug, Serialize, Deserialize)]
struct TrajectoryReport {
    angle_rad: f64,
    angle_deg: f64,
    power: f64,
    flight_time: f64,
    impact_x: f64,
    impact_y: f64,
    apex_y: f64,
    path: Vec<PathPoint>,
    markers: Vec<MarkerPoint>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Vector {
            origin_x,
            origin_y,
            aim_x,
            aim_y,
            max_radius,
        } => {
            let vector = resolve_aim_vector(
                Point2::new(origin_x, origin_y),
                Point2::new(aim_x, aim_y),
                max_radius,
            );
            println!("Angle: {:.4} rad ({:.2}°)", vector.angle, vector.angle.to_degrees());
            println!("Power: {:.2}%", vector.power);
        }

        Commands::Trajectory {
            origin_x,
            origin_y,
            aim_x,
            aim_y,
            gravity,
            max_velocity,
            max_radius,
            wind,
            wind_accel,
            ticks_per_second,
            resolution,
            sample_every,
            output,
        } => {
            let (canvas_width, canvas_height) = parse_resolution(&resolution)?;
            let params = PhysicsParams {
                gravity,
                max_velocity,
                max_radius,
                wind_direction_magnitude: wind,
                wind_acceleration: wind_accel,
                ticks_per_second,
                canvas_width,
                canvas_height,
            };

            let origin = Point2::new(origin_x, origin_y);
            let vector = resolve_aim_vector(origin, Point2::new(aim_x, aim_y), params.max_radius);
            let trajectory = compute_trajectory(origin, vector, &params)?;

            let report = build_report(&trajectory, vector.angle, vector.power, &params);
            display_report(report, output, sample_every)?;
        }

        Commands::Info => {
            let defaults = PhysicsParams::default();
            println!("╔════════════════════════════════════════╗");
            println!("║          AIMER ENGINE v0.1.0           ║");
            println!("╠════════════════════════════════════════╣");
            println!("║ Projectile aim-assist trajectory       ║");
            println!("║ engine with wind and time markers.     ║");
            println!("╚════════════════════════════════════════╝");
            println!();
            println!("Integration step:   {TIME_STEP_S} s");
            println!("Time markers:       up to {MAX_TIME_MARKERS}");
            println!("Default gravity:    {} px/s²", defaults.gravity);
            println!("Default velocity:   {} px/s at 100% power", defaults.max_velocity);
            println!("Default aim radius: {} px", defaults.max_radius);
            println!(
                "Default canvas:     {}x{}",
                defaults.canvas_width, defaults.canvas_height
            );
        }
    }

    Ok(())
}

fn build_report(
    trajectory: &Trajectory,
    angle: f64,
    power: f64,
    params: &PhysicsParams,
) -> TrajectoryReport {
    let path: Vec<PathPoint> = trajectory
        .path
        .iter()
        .enumerate()
        .map(|(i, p)| PathPoint {
            time: i as f64 * TIME_STEP_S,
            x: p.x,
            y: p.y,
        })
        .collect();

    let markers: Vec<MarkerPoint> = trajectory
        .markers
        .iter()
        .enumerate()
        .map(|(i, p)| MarkerPoint {
            tick: i + 1,
            time: (i + 1) as f64 * params.ticks_per_second,
            x: p.x,
            y: p.y,
        })
        .collect();

    let (flight_time, impact_x, impact_y) = match path.last() {
        Some(p) => (p.time, p.x, p.y),
        None => (0.0, 0.0, 0.0),
    };
    // Smallest screen y is the highest point of the flight
    let apex_y = path.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);

    TrajectoryReport {
        angle_rad: angle,
        angle_deg: angle.to_degrees(),
        power,
        flight_time,
        impact_x,
        impact_y,
        apex_y,
        path,
        markers,
    }
}

fn display_report(
    report: TrajectoryReport,
    format: OutputFormat,
    sample_every: usize,
) -> Result<(), Box<dyn Error>> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }

        OutputFormat::Csv => {
            println!("kind,tick,time,x,y");
            for p in &report.path {
                println!("path,,{:.3},{:.2},{:.2}", p.time, p.x, p.y);
            }
            for m in &report.markers {
                println!("marker,{},{:.3},{:.2},{:.2}", m.tick, m.time, m.x, m.y);
            }
        }

        OutputFormat::Table => {
            println!("╔════════════════════════════════════════╗");
            println!("║          TRAJECTORY RESULTS            ║");
            println!("╠════════════════════════════════════════╣");
            println!("║ Angle:             {:>8.2}°           ║", report.angle_deg);
            println!("║ Power:             {:>8.2} %          ║", report.power);
            println!("║ Flight Time:       {:>8.2} s          ║", report.flight_time);
            println!("║ Impact X:          {:>8.2} px         ║", report.impact_x);
            println!("║ Impact Y:          {:>8.2} px         ║", report.impact_y);
            println!("║ Apex Y:            {:>8.2} px         ║", report.apex_y);
            println!("║ Path Points:       {:>8}            ║", report.path.len());
            println!("╚════════════════════════════════════════╝");

            println!("\nPath (every {} points):", sample_every.max(1));
            println!("┌──────────┬──────────┬──────────┐");
            println!("│ Time (s) │  X (px)  │  Y (px)  │");
            println!("├──────────┼──────────┼──────────┤");
            let step = sample_every.max(1);
            for (i, p) in report.path.iter().enumerate() {
                if i % step == 0 || i == report.path.len() - 1 {
                    println!("│ {:>8.2} │ {:>8.2} │ {:>8.2} │", p.time, p.x, p.y);
                }
            }
            println!("└──────────┴──────────┴──────────┘");

            if !report.markers.is_empty() {
                println!("\nTime Markers:");
                println!("┌──────┬──────────┬──────────┬──────────┐");
                println!("│ Tick │ Time (s) │  X (px)  │  Y (px)  │");
                println!("├──────┼──────────┼──────────┼──────────┤");
                for m in &report.markers {
                    println!(
                        "│ {:>4} │ {:>8.2} │ {:>8.2} │ {:>8.2} │",
                        m.tick, m.time, m.x, m.y
                    );
                }
                println!("└──────┴──────────┴──────────┴──────────┘");
            }
        }
    }

    Ok(())
}
