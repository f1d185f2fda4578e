use env_logger::Env;
use railside_runner::{Railside, RunnerConfig};

fn print_help() {
    eprintln!(
        r#"Railside - SimRail layout snapshots

USAGE:
    railside [OPTIONS] --server <CODE> --layout <NUMBER>
    railside [OPTIONS] --layout <NUMBER> --layout-info
    railside [OPTIONS] --layout <NUMBER> --all
    railside [OPTIONS] --list-servers

OPTIONS:
    --config <PATH>     Load configuration from JSON file
    --server <CODE>     Server to render (default: default_server from config)
    --layout <NUMBER>   Layout to render
    --layout-info       Print the layout document instead of a snapshot
    --all               Render the layout for every listed server
    --list-servers      Print the listed servers
    --help              Print this help message

ENVIRONMENT VARIABLES:
    RAILSIDE_DATA_DIR   Directory of cached server documents
    RAILSIDE_LAYOUTS    Layouts document
    RAILSIDE_LINES      Lines document
    RUST_LOG            Log level filter (default: info)

EXAMPLES:
    # Snapshot of layout 1 on en1
    railside --server en1 --layout 1

    # Every server, custom data dir
    RAILSIDE_DATA_DIR=/var/cache/simrail railside --layout 1 --all
"#
    );
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Snapshot,
    LayoutInfo,
    All,
    ListServers,
}

fn require_value(args: &[String], i: usize, flag: &str) -> String {
    match args.get(i) {
        Some(value) => value.clone(),
        None => {
            eprintln!("Error: {} requires an argument", flag);
            std::process::exit(1);
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();
    let mut config_path: Option<String> = None;
    let mut server: Option<String> = None;
    let mut layout: Option<String> = None;
    let mut mode = Mode::Snapshot;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            "--config" | "-c" => {
                i += 1;
                config_path = Some(require_value(&args, i, "--config"));
            }
            "--server" | "-s" => {
                i += 1;
                server = Some(require_value(&args, i, "--server"));
            }
            "--layout" | "-l" => {
                i += 1;
                layout = Some(require_value(&args, i, "--layout"));
            }
            "--layout-info" => mode = Mode::LayoutInfo,
            "--all" => mode = Mode::All,
            "--list-servers" => mode = Mode::ListServers,
            arg => {
                eprintln!("Unknown argument: {}", arg);
                print_help();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let config = match config_path {
        Some(path) => {
            log::info!("Loading configuration from: {}", path);
            RunnerConfig::from_file(&path)?
        }
        None => RunnerConfig::default(),
    }
    .apply_env();

    let app = Railside::from_config(&config)?;

    if mode == Mode::ListServers {
        let servers = app.list_servers()?;
        println!("{}", serde_json::to_string_pretty(&servers)?);
        return Ok(());
    }

    let Some(layout) = layout else {
        eprintln!("Error: --layout is required");
        print_help();
        std::process::exit(1);
    };

    match mode {
        Mode::LayoutInfo => {
            let info = app.layout_info(&layout)?;
            println!("{}", serde_json::to_string_pretty(&info)?);
        }
        Mode::All => {
            let responses = app.render_all(&layout).await?;
            println!("{}", serde_json::to_string_pretty(&responses)?);
        }
        Mode::Snapshot | Mode::ListServers => {
            let server = app.resolve_server(server.as_deref())?;
            let response = app.render(&server, &layout)?;
            println!("{}", response.to_json_pretty()?);
        }
    }

    Ok(())
}
