use clap::{Args as ClapArgs, Parser, Subcommand};
use objpath_core::{GetOptions, PropError, SetOptions};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "objpath",
    about = "Read and edit JSON documents by dotted property path",
    version
)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Get value at path
    Get(GetArgs),
    /// List children at path
    List(PathArgs),
    /// Set value (raw JSON) at path; prints or writes with --out
    Set(SetArgs),
    /// Remove key or array element at path; prints or writes with --out
    Remove(RemoveArgs),
    /// Map an input event JSON file to {name: value}
    Event(EventArgs),
}

#[derive(ClapArgs, Debug)]
struct PathArgs {
    /// JSON file to load
    path: PathBuf,
    /// Property path, e.g. user.address.city
    #[arg(long = "path", value_name = "PROP")]
    prop: String,
    /// Path segment separator
    #[arg(long, default_value = ".")]
    sep: String,
}

#[derive(ClapArgs, Debug)]
struct GetArgs {
    #[command(flatten)]
    at: PathArgs,
    /// Raw JSON printed when the path is missing or null
    #[arg(long)]
    default: Option<String>,
}

#[derive(ClapArgs, Debug)]
struct SetArgs {
    #[command(flatten)]
    at: PathArgs,
    /// New value as raw JSON (e.g., 123, true, "str", {"a":1})
    #[arg(long)]
    value: String,
    /// Create arrays for numeric intermediate segments
    #[arg(long, default_value_t = false)]
    numeric_as_array: bool,
    /// Optional output .json path to write; otherwise prints to stdout
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(ClapArgs, Debug)]
struct RemoveArgs {
    #[command(flatten)]
    at: PathArgs,
    /// Optional output .json path to write; otherwise prints to stdout
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(ClapArgs, Debug)]
struct EventArgs {
    /// Event JSON file, shaped {"target": {"name": ..., "value": ...}}
    path: PathBuf,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Cmd::Get(a) => cmd_get(a),
        Cmd::List(a) => cmd_list(a),
        Cmd::Set(a) => cmd_set(a),
        Cmd::Remove(a) => cmd_remove(a),
        Cmd::Event(a) => cmd_event(a),
    }
}

fn init_logging(verbose: u8) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn fail(code: i32, msg: impl std::fmt::Display) -> ! {
    eprintln!("error: {}", msg);
    std::process::exit(code);
}

fn load(path: &std::path::Path) -> serde_json::Value {
    objpath_core::read_json_file(path).unwrap_or_else(|e| fail(2, e))
}

fn parse_raw(raw: &str, what: &str) -> serde_json::Value {
    serde_json::from_str(raw).unwrap_or_else(|e| fail(3, format!("invalid --{} JSON: {}", what, e)))
}

fn print_json(v: &serde_json::Value) {
    match serde_json::to_string_pretty(v) {
        Ok(s) => println!("{}", s),
        Err(e) => fail(5, e),
    }
}

fn emit(v: &serde_json::Value, out: Option<PathBuf>) {
    if let Some(out) = out {
        objpath_core::write_json_file(&out, v)
            .unwrap_or_else(|e| fail(5, format!("writing {}: {}", out.display(), e)));
    } else {
        print_json(v);
    }
}

fn cmd_get(args: GetArgs) {
    let v = load(&args.at.path);
    let mut opts = GetOptions::default().with_separator(args.at.sep);
    opts.default_value = args.default.as_deref().map(|raw| parse_raw(raw, "default"));
    match objpath_core::get_prop(&args.at.prop, &v, &opts) {
        Some(x) => print_json(&x),
        None => {
            eprintln!("not found: {}", args.at.prop);
            std::process::exit(3);
        }
    }
}

fn cmd_list(args: PathArgs) {
    let v = load(&args.path);
    match objpath_core::list_children(&args.prop, &v, &args.sep) {
        Ok(children) => {
            for c in children {
                println!(
                    "{}\t{:?}{}",
                    c.key_or_index,
                    c.kind,
                    c.len.map(|n| format!("\t(len={})", n)).unwrap_or_default()
                );
            }
        }
        Err(e) => fail(3, e),
    }
}

fn cmd_set(args: SetArgs) {
    let mut v = load(&args.at.path);
    let new_val = parse_raw(&args.value, "value");
    let opts = SetOptions::default()
        .with_separator(args.at.sep)
        .numeric_path_as_array(args.numeric_as_array);
    objpath_core::set_prop(&args.at.prop, new_val, &mut v, &opts).unwrap_or_else(|e| fail(4, e));
    emit(&v, args.out);
}

fn cmd_remove(args: RemoveArgs) {
    let mut v = load(&args.at.path);
    if let Err(e) = objpath_core::remove_prop(&args.at.prop, &mut v, &args.at.sep) {
        let code = if matches!(e, PropError::NotFound { .. }) { 3 } else { 4 };
        fail(code, e);
    }
    emit(&v, args.out);
}

fn cmd_event(args: EventArgs) {
    let ev = load(&args.path);
    let mapped = objpath_core::map_input_event_value(&ev).unwrap_or_else(|e| fail(3, e));
    print_json(&serde_json::Value::Object(mapped));
}
