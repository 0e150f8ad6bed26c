// sash-demo: replay a split scenario against the headless host.
//
//   sash-demo [scenario.json]
//
// Without an argument a built-in drag sweep is replayed. Options come from the
// scenario when it has them, otherwise from <config dir>/sash/split.json.

mod scenario;

use std::path::Path;

use scenario::{Report, Scenario, Step};

fn builtin() -> Scenario {
    Scenario {
        extent: sash_core::Size::new(900.0, 400.0),
        panes: 3,
        options: None,
        static_host: false,
        steps: vec![
            Step::Press { gutter: 0, at: 295.0 },
            Step::Move { at: 400.0 },
            Step::Move { at: 120.0 },
            Step::Release,
            Step::Collapse { pane: 2 },
            Step::SetSizes {
                sizes: vec![25.0, 50.0, 25.0],
            },
        ],
    }
}

fn print_report(report: &Report) {
    let sizes = match &report.sizes {
        Some(sizes) => sizes
            .iter()
            .map(|s| format!("{:6.2}%", s))
            .collect::<Vec<_>>()
            .join(" "),
        None => "static".to_string(),
    };
    let extents = report
        .extents
        .iter()
        .map(|e| format!("{:7.1}px", e))
        .collect::<Vec<_>>()
        .join(" ");
    println!("{:<28} {}  | {}", report.label, sizes, extents);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let scenario = match std::env::args().nth(1) {
        Some(path) => scenario::read_scenario(Path::new(&path))?,
        None => builtin(),
    };
    let options = scenario
        .options
        .clone()
        .unwrap_or_else(sash_layout::load_options);
    log::info!(
        "replaying {} steps over {} panes ({})",
        scenario.steps.len(),
        scenario.panes,
        options.direction.as_str()
    );

    for report in scenario::run(&scenario, options)? {
        print_report(&report);
    }
    Ok(())
}
