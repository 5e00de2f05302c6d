use clap::{Parser, Subcommand};
use log::debug;
use zone_cad::{
    geometry::{point_in_polygon, Point3},
    io::{read_points_csv_3d, read_to_string, write_boundary_geojson, write_points_csv_3d},
    ZoneConfig, ZoneEditor,
};

mod script;

#[derive(Parser)]
#[command(name = "zone_cad_cli", version)]
struct Cli {
    /// JSON file with editor settings
    #[arg(long, global = true)]
    config: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a zone boundary from a CSV file of x,y[,z] samples.
    Hull {
        input: String,
        #[arg(long)]
        concavity: Option<f64>,
        #[arg(long)]
        min_edge: Option<f64>,
        /// Write the boundary as x,y,z CSV.
        #[arg(long)]
        output: Option<String>,
        /// Write the boundary as a GeoJSON polygon.
        #[arg(long)]
        geojson: Option<String>,
    },
    /// Run an add/remove/recompute/contains script against an empty zone.
    Edit {
        script: String,
        #[arg(long)]
        output: Option<String>,
        #[arg(long)]
        geojson: Option<String>,
    },
    /// Check whether a point lies inside a boundary saved as CSV.
    Contains { boundary: String, x: f64, y: f64, z: f64 },
    /// Write the default settings to a JSON file.
    InitConfig { path: String },
}

fn fail(msg: String) -> ! {
    eprintln!("{}", msg);
    std::process::exit(1);
}

fn load_config(path: Option<&str>) -> ZoneConfig {
    match path {
        Some(p) => match ZoneConfig::load(p) {
            Ok(cfg) => {
                debug!("loaded settings from {}", p);
                cfg
            }
            Err(e) => fail(format!("Error reading {}: {}", p, e)),
        },
        None => ZoneConfig::default(),
    }
}

fn print_boundary(editor: &ZoneEditor) {
    println!("Boundary: {} vertices", editor.boundary().len());
    println!("Area: {:.3}", editor.area());
    for p in editor.boundary() {
        println!("{:.3},{:.3},{:.3}", p.x, p.y, p.z);
    }
}

fn write_outputs(editor: &ZoneEditor, output: Option<String>, geojson: Option<String>) {
    if let Some(path) = output {
        match write_points_csv_3d(&path, editor.boundary()) {
            Ok(()) => println!("Wrote {}", path),
            Err(e) => fail(format!("Error writing {}: {}", path, e)),
        }
    }
    if let Some(path) = geojson {
        match write_boundary_geojson(&path, editor.boundary()) {
            Ok(()) => println!("Wrote {}", path),
            Err(e) => fail(format!("Error writing {}: {}", path, e)),
        }
    }
}

fn main() {
    env_logger::Builder::from_default_env().init();
    let cli = Cli::parse();
    let mut config = load_config(cli.config.as_deref());
    match cli.command {
        Commands::Hull {
            input,
            concavity,
            min_edge,
            output,
            geojson,
        } => match read_points_csv_3d(&input) {
            Ok(pts) => {
                if let Some(c) = concavity {
                    config.concavity = c;
                }
                if let Some(l) = min_edge {
                    config.min_edge_length = l;
                }
                let mut editor = ZoneEditor::with_config(config);
                editor.insert_samples(pts);
                editor.recompute();
                print_boundary(&editor);
                write_outputs(&editor, output, geojson);
            }
            Err(e) => fail(format!("Error reading {}: {}", input, e)),
        },
        Commands::Edit {
            script: path,
            output,
            geojson,
        } => {
            let ops = match read_to_string(&path).and_then(|text| script::parse_script(&text)) {
                Ok(ops) => ops,
                Err(e) => fail(format!("Error reading {}: {}", path, e)),
            };
            let mut editor = ZoneEditor::with_config(config);
            if let Err(e) = script::run(&mut editor, &ops, std::io::stdout().lock()) {
                fail(format!("Error running {}: {}", path, e));
            }
            print_boundary(&editor);
            write_outputs(&editor, output, geojson);
        }
        Commands::Contains { boundary, x, y, z } => match read_points_csv_3d(&boundary) {
            Ok(pts) => {
                let p = Point3::new(x, y, z);
                if point_in_polygon(p.xy(), &pts) {
                    println!("inside");
                } else {
                    println!("outside");
                }
            }
            Err(e) => fail(format!("Error reading {}: {}", boundary, e)),
        },
        Commands::InitConfig { path } => match config.save(&path) {
            Ok(()) => println!("Wrote {}", path),
            Err(e) => fail(format!("Error writing {}: {}", path, e)),
        },
    }
}
