use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use traj_viz_rs::{
    draw_ss, moving_average, read_ss, read_xvg, save_smoothed_to_csv, ShapeBuffer,
    DEFAULT_HEIGHT, DEFAULT_WINDOW, DEFAULT_YPOS,
};

/// Command-line tool for visualizing secondary-structure trajectories
#[derive(Parser)]
#[command(name = "traj-viz")]
#[command(about = "Visualize secondary-structure trajectories from xvg files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Smooth xvg data with a centered moving average
    Smooth {
        /// Path to the two-column xvg data file
        #[arg(short, long)]
        input: PathBuf,

        /// Half-window radius for the moving average (default: 3)
        #[arg(short, long, default_value_t = DEFAULT_WINDOW)]
        window: usize,

        /// Output CSV path (default: auto-generated from input path)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render secondary-structure bands to an SVG file
    Render {
        /// Path to a file holding the secondary-structure string (S/H/L codes)
        #[arg(short, long)]
        ss: PathBuf,

        /// Optional xvg file supplying the band x-positions (default: 0..n)
        #[arg(short, long)]
        xvg: Option<PathBuf>,

        /// Baseline y-coordinate for the bands (default: 20)
        #[arg(long, default_value_t = DEFAULT_YPOS)]
        ypos: f64,

        /// Band height (default: 2)
        #[arg(long, default_value_t = DEFAULT_HEIGHT)]
        height: f64,

        /// Output SVG path (default: auto-generated from ss path)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Build an output path next to `input` with the given suffix, e.g.
/// "data.xvg" + "_smoothed.csv" -> "data_smoothed.csv"
fn auto_output_path(input: &Path, suffix: &str) -> PathBuf {
    let base = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    let dir = input.parent().unwrap_or(Path::new("."));
    dir.join(format!("{}{}", base, suffix))
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Smooth {
            input,
            window,
            output,
        } => {
            println!("Smoothing xvg data: {:?}", input);
            println!("Window radius: {}", window);

            let (x, y) = match read_xvg(&input) {
                Ok(data) => {
                    println!("✅ Loaded {} data points", data.0.len());
                    data
                }
                Err(e) => {
                    eprintln!("❌ Error reading xvg file: {}", e);
                    std::process::exit(1);
                }
            };

            let y_smooth = moving_average(&y, window);

            let output_path = output.unwrap_or_else(|| auto_output_path(&input, "_smoothed.csv"));

            match save_smoothed_to_csv(&x, &y, &y_smooth, &output_path) {
                Ok(()) => {
                    println!("📄 Smoothed data saved to: {:?}", output_path);
                }
                Err(e) => {
                    eprintln!("❌ Error saving smoothed data: {}", e);
                    std::process::exit(1);
                }
            }
        }

        Commands::Render {
            ss,
            xvg,
            ypos,
            height,
            output,
        } => {
            println!("Rendering secondary-structure bands: {:?}", ss);

            let ss_string = match read_ss(&ss) {
                Ok(s) => {
                    println!("✅ Loaded {} residue codes", s.chars().count());
                    s
                }
                Err(e) => {
                    eprintln!("❌ Error reading ss file: {}", e);
                    std::process::exit(1);
                }
            };

            let n_residues = ss_string.chars().count();

            let positions = match &xvg {
                Some(xvg_path) => match read_xvg(xvg_path) {
                    Ok((x, _)) => {
                        if x.len() != n_residues {
                            eprintln!(
                                "❌ Length mismatch: {} x-positions but {} residue codes",
                                x.len(),
                                n_residues
                            );
                            std::process::exit(1);
                        }
                        x
                    }
                    Err(e) => {
                        eprintln!("❌ Error reading xvg file: {}", e);
                        std::process::exit(1);
                    }
                },
                None => (0..n_residues).map(|i| i as f64).collect(),
            };

            let mut buffer = ShapeBuffer::new();
            draw_ss(&mut buffer, &ss_string, &positions, ypos, height);
            println!("✅ Drew {} band(s)", buffer.len());

            let output_path = output.unwrap_or_else(|| auto_output_path(&ss, "_ss.svg"));

            match buffer.write_svg(&output_path) {
                Ok(()) => {
                    println!("📄 Bands saved to: {:?}", output_path);
                }
                Err(e) => {
                    eprintln!("❌ Error writing SVG: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }
}
