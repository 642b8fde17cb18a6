// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

mod config;
mod runtime;

use anyhow::{Context, Result, anyhow};
use config::{Config, DataSource};
use fleetdeck_app::TabKind;
use fleetdeck_client::Client;
use fleetdeck_table::SortDirection;
use runtime::{RecordSource, ScreenRequest, SortRequest};
use std::env;
use std::path::PathBuf;

fn main() {
    if let Err(error) = run() {
        eprintln!("{error:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let options = parse_cli_args(env::args().skip(1), Config::default_path()?)?;
    if options.show_help {
        print_help();
        return Ok(());
    }

    if options.print_config_path {
        println!("{}", options.config_path.display());
        return Ok(());
    }

    if options.print_example {
        print!("{}", Config::example_config(&options.config_path));
        return Ok(());
    }

    let config = Config::load(&options.config_path).with_context(|| {
        format!(
            "load config {}; run `fleetdeck --print-example-config` to generate a template",
            options.config_path.display()
        )
    })?;

    let source = if options.demo || config.source() == DataSource::Demo {
        RecordSource::Demo {
            seed: config.seed(),
        }
    } else {
        let client = Client::new(config.base_url(), config.timeout()?).with_context(|| {
            format!(
                "invalid [data] config in {}; fix base_url/timeout values",
                options.config_path.display()
            )
        })?;
        RecordSource::Remote(client)
    };
    if options.check_only {
        return Ok(());
    }

    let request = screen_request(&options, &config)?;
    print!("{}", runtime::run_screen(&source, &request)?);
    Ok(())
}

fn screen_request(options: &CliOptions, config: &Config) -> Result<ScreenRequest> {
    let tab = match &options.screen {
        Some(name) => TabKind::parse(name).ok_or_else(|| {
            anyhow!("unknown screen {name:?}; expected one of: fleet, trips, vehicles, users, orders")
        })?,
        None => TabKind::Fleet,
    };

    let mut filters = Vec::new();
    for raw in &options.filters {
        let (field, value) = raw
            .split_once('=')
            .ok_or_else(|| anyhow!("--filter expects field=value, got {raw:?}"))?;
        filters.push((field.to_owned(), value.to_owned()));
    }

    let sort = options.sort.as_deref().map(parse_sort).transpose()?;

    Ok(ScreenRequest {
        tab,
        filters,
        search: options.search.clone(),
        sort,
        page: options.page.unwrap_or(0),
        page_size: options.page_size.unwrap_or_else(|| config.page_size()),
    })
}

fn parse_sort(raw: &str) -> Result<SortRequest> {
    let (field, direction) = match raw.split_once(':') {
        Some((field, direction)) => {
            let direction = SortDirection::parse(direction)
                .ok_or_else(|| anyhow!("--sort direction must be asc or desc, got {direction:?}"))?;
            (field, direction)
        }
        None => (raw, SortDirection::Asc),
    };
    if field.is_empty() {
        return Err(anyhow!("--sort expects field or field:direction, got {raw:?}"));
    }
    Ok(SortRequest {
        field: field.to_owned(),
        direction,
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliOptions {
    config_path: PathBuf,
    print_config_path: bool,
    print_example: bool,
    demo: bool,
    check_only: bool,
    show_help: bool,
    screen: Option<String>,
    filters: Vec<String>,
    search: Option<String>,
    sort: Option<String>,
    page: Option<usize>,
    page_size: Option<usize>,
}

fn parse_cli_args<I, S>(args: I, default_config_path: PathBuf) -> Result<CliOptions>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut options = CliOptions {
        config_path: default_config_path,
        print_config_path: false,
        print_example: false,
        demo: false,
        check_only: false,
        show_help: false,
        screen: None,
        filters: Vec::new(),
        search: None,
        sort: None,
        page: None,
        page_size: None,
    };

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_ref() {
            "--config" => {
                options.config_path = PathBuf::from(required_value(&mut iter, "--config")?.as_ref());
            }
            "--print-config-path" => {
                options.print_config_path = true;
            }
            "--print-example-config" => {
                options.print_example = true;
            }
            "--demo" => {
                options.demo = true;
            }
            "--check" => {
                options.check_only = true;
            }
            "--screen" => {
                options.screen = Some(required_value(&mut iter, "--screen")?.as_ref().to_owned());
            }
            "--filter" => {
                options
                    .filters
                    .push(required_value(&mut iter, "--filter")?.as_ref().to_owned());
            }
            "--search" => {
                options.search = Some(required_value(&mut iter, "--search")?.as_ref().to_owned());
            }
            "--sort" => {
                options.sort = Some(required_value(&mut iter, "--sort")?.as_ref().to_owned());
            }
            "--page" => {
                let value = required_value(&mut iter, "--page")?;
                let page: usize = value
                    .as_ref()
                    .parse()
                    .with_context(|| format!("--page expects a number, got {:?}", value.as_ref()))?;
                options.page = Some(page.saturating_sub(1));
            }
            "--page-size" => {
                let value = required_value(&mut iter, "--page-size")?;
                let size: usize = value.as_ref().parse().with_context(|| {
                    format!("--page-size expects a number, got {:?}", value.as_ref())
                })?;
                if size == 0 {
                    return Err(anyhow!("--page-size must be at least 1"));
                }
                options.page_size = Some(size);
            }
            "--help" | "-h" => {
                options.show_help = true;
            }
            unknown => {
                return Err(anyhow!(
                    "unknown argument {unknown:?}; run with --help to see supported options"
                ));
            }
        }
    }

    Ok(options)
}

fn required_value<I, S>(iter: &mut I, flag: &str) -> Result<S>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    iter.next().ok_or_else(|| anyhow!("{flag} requires a value"))
}

fn print_help() {
    println!("fleetdeck");
    println!("  --config <path>          Use a specific config path");
    println!("  --print-config-path      Print resolved config path");
    println!("  --print-example-config   Print a config template");
    println!("  --demo                   Serve built-in demo records regardless of config");
    println!("  --check                  Validate config and data-source setup, then exit");
    println!("  --screen <name>          fleet | trips | vehicles | users | orders (default fleet)");
    println!("  --filter <field=value>   Exact-match dropdown filter; repeatable");
    println!("  --search <query>         Fuzzy search across the screen's searchable columns");
    println!("  --sort <field[:dir]>     Sort by column, dir is asc (default) or desc");
    println!("  --page <n>               1-based page number (default 1)");
    println!("  --page-size <n>          Rows per page (default from config, 10)");
    println!("  --help                   Show this help");
}
