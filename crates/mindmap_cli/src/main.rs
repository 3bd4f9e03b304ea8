//! Mind-map inspection CLI.
//!
//! # Responsibility
//! - Exercise `mindmap_core` against a real document from the shell.
//! - Keep output deterministic for quick local sanity checks.

use clap::Parser;
use log::info;
use mindmap_core::{
    default_log_level, domain_positions, flush_logging, init_logging, load_mind_map,
    match_badge_text, DataSource, MindMapApp, MindMapNode,
};

mod cli;

use crate::cli::{Cli, Command, SearchArgs, ShowArgs};

fn main() {
    let cli = Cli::parse();
    let exit_code = run(&cli);
    flush_logging();
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> i32 {
    if let Some(log_dir) = &cli.log_dir {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        if let Err(error) = init_logging(level, log_dir) {
            eprintln!("error: failed to initialize logging: {error}");
            return 1;
        }
    }

    if let Command::Version = cli.command {
        println!("mindmap_core version={}", mindmap_core::core_version());
        return 0;
    }

    let source = cli.data.clone().map(DataSource::new).unwrap_or_else(DataSource::resolve);
    let mut app = MindMapApp::new();
    app.finish_load(load_mind_map(&source));
    if let Some(message) = app.status.error_message() {
        eprintln!("error: {message}");
        return 1;
    }

    info!(
        "event=cli_run module=cli status=ok path={}",
        source.path.display()
    );
    let exit_code = match &cli.command {
        Command::Search(args) => run_search(&mut app, args),
        Command::Show(args) => run_show(&mut app, args),
        Command::Layout => run_layout(&app),
        Command::Version => 0,
    };
    app.shutdown();
    exit_code
}

fn run_search(app: &mut MindMapApp, args: &SearchArgs) -> i32 {
    app.search.set_query(args.query.as_str());
    let hits = app.search.results(&app.view);
    if hits.is_empty() {
        println!("No results.");
        return 0;
    }

    for (rank, hit) in hits.iter().enumerate() {
        let tags = hit
            .matched_fields
            .iter()
            .map(|field| field.as_str())
            .collect::<Vec<_>>()
            .join(",");
        println!(
            "{:>2}. {:>6.1}  [{}] {}  id={} kind={} tags={}",
            rank + 1,
            hit.score,
            match_badge_text(&hit.matched_fields),
            hit.highlighted_title,
            hit.node.id,
            hit.node.kind,
            tags
        );
    }
    0
}

fn run_show(app: &mut MindMapApp, args: &ShowArgs) -> i32 {
    for id in &args.select {
        if !app.view.select_by_id(id) {
            eprintln!("error: node not found: {id}");
            return 1;
        }
    }

    let view = &app.view;
    let trail = view
        .breadcrumbs()
        .iter()
        .map(|node| node.title.as_str())
        .collect::<Vec<_>>()
        .join(" > ");
    println!("breadcrumbs: {trail}");
    if let Some(selected) = view.selected() {
        print_node("selected", selected);
    }
    println!("sidebar: {}", if view.sidebar_visible() { "open" } else { "closed" });
    if let Some(domain) = view.selected_domain() {
        println!(
            "domain: {} (expanded={})",
            domain.title,
            view.is_domain_expanded(&domain.id)
        );
        for subtopic in view.domain_subtopics() {
            let marker = if view.is_node_active(&subtopic.id) { '*' } else { '-' };
            println!("  {marker} {} ({})", subtopic.title, subtopic.id);
        }
    }
    0
}

fn run_layout(app: &MindMapApp) -> i32 {
    let Some(root) = app.view.root() else {
        return 1;
    };
    for position in domain_positions(root) {
        println!(
            "{:<24} x={:>6.2} y={:>6.2} angle={:>6.3} {}",
            position.node.id,
            position.x,
            position.y,
            position.angle,
            app.view.animation_state(&position.node.id)
        );
    }
    0
}

fn print_node(label: &str, node: &MindMapNode) {
    println!("{label}: {} [{}] id={}", node.title, node.kind, node.id);
    if !node.description.is_empty() {
        println!("  {}", node.description);
    }
    if let Some(content) = &node.content {
        if !content.overview.is_empty() {
            println!("  overview: {}", content.overview);
        }
        for feature in &content.key_features {
            println!("  feature: {feature}");
        }
        for benefit in &content.benefits {
            println!("  benefit: {benefit}");
        }
    }
}
