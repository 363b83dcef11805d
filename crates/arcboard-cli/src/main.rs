//! Arcboard contract studio CLI.

use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, Subcommand};
use miette::IntoDiagnostic;

use arc_contracts::{registry, ContractStudio, ContractTemplate, StudioConfig};
use arcboard_server::{init_tracing, ServerConfig};

mod params;
mod ui;

#[derive(Parser)]
#[command(name = "arcboard")]
#[command(about = "Arcboard contract studio - generate OpenZeppelin contracts from templates")]
#[command(version)]
struct Cli {
    /// Log library activity to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Reject symbols that are not valid Solidity identifiers
    #[arg(long, global = true)]
    strict: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available contract templates
    Templates {
        /// Only show templates in this category
        #[arg(short, long)]
        category: Option<String>,

        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate parameters without generating code
    Check {
        /// Template id (erc20, erc721, erc1155)
        template: String,

        /// Parameter value, repeatable. Read as JSON unless the parameter is text
        #[arg(short = 'p', long = "param", value_name = "KEY=VALUE")]
        params: Vec<String>,

        /// JSON file with parameter values
        #[arg(long = "params", value_name = "FILE")]
        params_file: Option<PathBuf>,
    },

    /// Generate a Solidity contract
    Generate {
        /// Template id (erc20, erc721, erc1155)
        template: String,

        /// Parameter value, repeatable. Read as JSON unless the parameter is text
        #[arg(short = 'p', long = "param", value_name = "KEY=VALUE")]
        params: Vec<String>,

        /// JSON file with parameter values
        #[arg(long = "params", value_name = "FILE")]
        params_file: Option<PathBuf>,

        /// Output directory for the generated .sol file
        #[arg(short, long, default_value = "contracts")]
        output: PathBuf,

        /// Print the source instead of writing a file
        #[arg(long, conflicts_with = "json")]
        stdout: bool,

        /// Print the generated contract as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run the HTTP API
    Serve {
        /// Address to bind (overrides ARCBOARD_BIND)
        #[arg(short, long)]
        bind: Option<String>,
    },
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        init_tracing(false);
    }

    match cli.command {
        Commands::Templates { category, json } => {
            list_templates(category.as_deref(), json)?;
        }

        Commands::Check {
            template,
            params,
            params_file,
        } => {
            let studio = studio(PathBuf::new(), cli.strict);
            check_parameters(&studio, &template, &params, params_file)?;
        }

        Commands::Generate {
            template,
            params,
            params_file,
            output,
            stdout,
            json,
        } => {
            let studio = studio(output, cli.strict);
            let values = params::collect(
                registry::get_template(&template),
                params_file.as_deref(),
                &params,
            )?;
            let output = if json {
                Output::Json
            } else if stdout {
                Output::Stdout
            } else {
                Output::File
            };
            generate_contract(&studio, &template, &values, output)?;
        }

        Commands::Serve { bind } => {
            let mut config = ServerConfig::from_env();
            if let Some(bind) = bind {
                config.bind_addr = bind;
            }
            config.strict_identifiers |= cli.strict;

            if !cli.verbose {
                init_tracing(config.log_json);
            }

            ui::print_compact_header(env!("CARGO_PKG_VERSION"));
            ui::info(&format!("Serving contract API on {}", config.bind_addr));
            println!();

            arcboard_server::serve(config).await.into_diagnostic()?;
        }
    }

    Ok(())
}

fn studio(out_dir: PathBuf, strict: bool) -> ContractStudio {
    ContractStudio::new(StudioConfig {
        out_dir,
        strict_identifiers: strict || ServerConfig::from_env().strict_identifiers,
    })
}

fn list_templates(category: Option<&str>, json: bool) -> miette::Result<()> {
    let templates: Vec<&ContractTemplate> = match category {
        Some(category) => registry::list_templates_by_category(category),
        None => registry::list_templates().iter().collect(),
    };

    if json {
        let out = serde_json::to_string_pretty(&templates).into_diagnostic()?;
        println!("{}", out);
        return Ok(());
    }

    if templates.is_empty() {
        ui::info(&format!(
            "No templates in category '{}'. Try one of: {}",
            category.unwrap_or_default(),
            registry::categories().join(", ")
        ));
        return Ok(());
    }

    ui::box_header("Contract templates");
    ui::box_line("");
    ui::box_line(&format!(
        "{} templates {} {} categories",
        templates.len(),
        ui::symbols::DOT,
        registry::categories().len()
    ));
    ui::box_footer();
    println!();

    for template in templates {
        let required = template.parameters.iter().filter(|p| p.required).count();
        let icon = template.icon.unwrap_or(" ");
        ui::template_line(
            template.id,
            &format!("{} {}", icon, template.name),
            template.category,
            required,
            template.parameters.len(),
        );
        for spec in template.parameters {
            ui::param_line(spec.name, spec.kind.as_str(), spec.required, spec.description);
        }
        println!();
    }

    ui::dim("Required parameters are marked with a filled diamond.");
    Ok(())
}

fn check_parameters(
    studio: &ContractStudio,
    template: &str,
    assignments: &[String],
    params_file: Option<PathBuf>,
) -> miette::Result<()> {
    let resolved = studio.template(template)?;
    let values = params::collect(Some(resolved), params_file.as_deref(), assignments)?;
    let result = studio.validate(resolved.id, &values)?;

    if result.valid {
        ui::looking_good();
        println!();
        println!(
            "    {} {} {} parameters supplied {} {} defaults",
            resolved.name,
            ui::symbols::DOT,
            resolved.parameters.iter().filter(|p| values.contains_key(p.name)).count(),
            ui::symbols::DOT,
            resolved.parameters.iter().filter(|p| p.default_value.is_some()).count()
        );
        return Ok(());
    }

    ui::nope_header();
    for message in &result.errors {
        ui::error(message);
    }
    println!();
    result.into_result()?;
    Ok(())
}

enum Output {
    File,
    Stdout,
    Json,
}

fn generate_contract(
    studio: &ContractStudio,
    template: &str,
    values: &arc_contracts::ParamValues,
    output: Output,
) -> miette::Result<()> {
    let start = Instant::now();

    let contract = match output {
        Output::File => {
            let spinner = ui::spinner("Generating contract...");
            let result = studio.generate(template, values);
            spinner.finish_and_clear();
            result?
        }
        Output::Stdout | Output::Json => studio.generate(template, values)?,
    };

    match output {
        Output::Stdout => print!("{}", contract.source_code),
        Output::Json => {
            let out = serde_json::to_string_pretty(&contract).into_diagnostic()?;
            println!("{}", out);
        }
        Output::File => {
            let path = studio.write_contract(&contract)?;
            ui::success(&format!(
                "{} written to {}",
                contract.contract_name,
                path.display()
            ));
            ui::divider();
            ui::timing("Generated", start.elapsed().as_millis());
        }
    }

    Ok(())
}
