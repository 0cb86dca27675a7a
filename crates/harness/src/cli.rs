//! Command line interface for the `hooke` harness.

use std::{io, path::PathBuf};

use clap::Parser;
use hooke_solvers::MethodRegistry;
use tracing::info;

use crate::{HarnessError, config::HarnessConfig};

/// Compare an approximate oscillator integration against the exact solution.
#[derive(Parser, Debug, Clone, Default, PartialEq)]
#[command(name = "hooke", version, about, long_about = None)]
pub struct Args {
    /// Path to configuration file (TOML format)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Coefficient table name or alias (e.g. extended-numerov, numerov, verlet)
    #[arg(short, long, value_name = "NAME")]
    pub method: Option<String>,

    /// Number of steps after the initial sample
    #[arg(short = 'n', long, value_name = "COUNT")]
    pub steps: Option<usize>,

    /// Spring constant k (N/m)
    #[arg(short = 'k', long, value_name = "N/M", allow_negative_numbers = true)]
    pub stiffness: Option<f64>,

    /// Mass m (kg)
    #[arg(long, value_name = "KG", allow_negative_numbers = true)]
    pub mass: Option<f64>,

    /// Initial displacement y0 (m)
    #[arg(long, value_name = "M", allow_negative_numbers = true)]
    pub displacement: Option<f64>,

    /// Initial velocity v0 (m/s)
    #[arg(long, value_name = "M/S", allow_negative_numbers = true)]
    pub velocity: Option<f64>,

    /// Time step h (s)
    #[arg(long, value_name = "S", allow_negative_numbers = true)]
    pub step_size: Option<f64>,

    /// Run the exact and approximate solvers on separate threads
    #[arg(long)]
    pub concurrent: bool,

    /// Print only the global error
    #[arg(short, long)]
    pub quiet: bool,

    /// List available methods and exit
    #[arg(long)]
    pub list_methods: bool,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long)]
    pub verbose: bool,
}

/// Prints the registered tables, the orders they cover, and their aliases.
///
/// # Errors
///
/// Returns any error from the writer.
pub fn write_method_list(mut out: impl io::Write, registry: &MethodRegistry) -> io::Result<()> {
    writeln!(out, "Available methods:")?;
    for name in registry.list_available() {
        let order = registry.get(&name).map(|table| table.order()).unwrap_or_default();
        writeln!(out, "  - {name} (order {order})")?;
    }

    let orders: Vec<String> = registry.orders().iter().map(u32::to_string).collect();
    if !orders.is_empty() {
        writeln!(out, "\nOrders covered: {}", orders.join(", "))?;
    }

    let aliases = registry.list_aliases();
    if !aliases.is_empty() {
        writeln!(out, "\nAliases:")?;
        for (alias, target) in aliases {
            writeln!(out, "  - {alias} -> {target}")?;
        }
    }

    Ok(())
}

/// Loads the configuration file (if any) and applies command line overrides.
///
/// # Errors
///
/// Returns [`HarnessError::Config`] if the file cannot be loaded and
/// [`HarnessError::UnknownMethod`] if `--method` names no registered table.
pub fn load_and_apply_config(
    args: &Args,
    registry: &MethodRegistry,
) -> Result<HarnessConfig, HarnessError> {
    let mut config = match &args.config {
        Some(path) => {
            info!(path = %path.display(), "loading configuration");
            HarnessConfig::load(path)?
        }
        None => HarnessConfig::default(),
    };

    let osc = &mut config.oscillator;
    if let Some(steps) = args.steps {
        osc.steps = steps;
    }
    if let Some(stiffness) = args.stiffness {
        osc.stiffness = stiffness;
    }
    if let Some(mass) = args.mass {
        osc.mass = mass;
    }
    if let Some(displacement) = args.displacement {
        osc.displacement = displacement;
    }
    if let Some(velocity) = args.velocity {
        osc.velocity = velocity;
    }
    if let Some(step_size) = args.step_size {
        osc.step_size = step_size;
    }

    if let Some(method) = &args.method {
        registry.get(method)?;
        config.run.method.clone_from(method);
    }
    if args.concurrent {
        config.run.concurrent = true;
    }
    if args.quiet {
        config.output.per_step = false;
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("hooke").chain(args.iter().copied())).unwrap()
    }

    fn registry() -> MethodRegistry {
        MethodRegistry::new().with_standard_methods()
    }

    #[test]
    fn command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn no_flags_gives_default_config() {
        let config = load_and_apply_config(&parse(&[]), &registry()).unwrap();
        assert_eq!(config, HarnessConfig::default());
    }

    #[test]
    fn flags_override_defaults() {
        let args = parse(&[
            "--steps",
            "250",
            "-k",
            "2",
            "--mass",
            "0.5",
            "--displacement",
            "-3",
            "--velocity",
            "0",
            "--step-size",
            "0.05",
            "--method",
            "verlet",
            "--concurrent",
            "--quiet",
        ]);

        let config = load_and_apply_config(&args, &registry()).unwrap();
        let osc = &config.oscillator;

        assert_eq!(osc.steps, 250);
        assert_eq!(osc.stiffness, 2.0);
        assert_eq!(osc.mass, 0.5);
        assert_eq!(osc.displacement, -3.0);
        assert_eq!(osc.velocity, 0.0);
        assert_eq!(osc.step_size, 0.05);
        assert_eq!(config.run.method, "verlet");
        assert!(config.run.concurrent);
        assert!(!config.output.per_step);
    }

    #[test]
    fn unknown_method_is_rejected_up_front() {
        let result = load_and_apply_config(&parse(&["--method", "euler"]), &registry());
        assert!(matches!(result, Err(HarnessError::UnknownMethod(_))));
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let result = load_and_apply_config(
            &parse(&["--config", "/nonexistent/hooke.toml"]),
            &registry(),
        );
        assert!(matches!(result, Err(HarnessError::Config(_))));
    }

    #[test]
    fn method_list_shows_names_orders_and_aliases() {
        let mut out = Vec::new();
        write_method_list(&mut out, &registry()).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("  - extended-numerov (order 6)"));
        assert!(text.contains("  - stormer (order 2)"));
        assert!(text.contains("\nOrders covered: 2, 4, 6\n"));
        assert!(text.contains("  - etshm6 -> extended-numerov"));
        assert!(text.contains("  - verlet -> stormer"));
    }

    #[test]
    fn empty_registry_lists_no_orders_or_aliases() {
        let mut out = Vec::new();
        write_method_list(&mut out, &MethodRegistry::new()).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "Available methods:\n");
    }
}
