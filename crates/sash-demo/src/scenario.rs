// Scenario files: a container size, a pane count, optional split options and a
// list of input steps to replay against a headless host.

use std::path::{Path, PathBuf};

use sash_core::{MouseButton, PaneRef, Pointer, Size, SplitDirection, SplitEvent, Vec2};
use sash_layout::headless::HeadlessHost;
use sash_layout::{SplitError, SplitHandle, SplitHooks, SplitOptions, SplitStrategy};
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    #[error("failed to read scenario {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse scenario {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error(transparent)]
    Split(#[from] SplitError),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    #[serde(default = "default_extent")]
    pub extent: Size,
    #[serde(default = "default_panes")]
    pub panes: usize,
    /// Options for the split. When absent the user's options file is used.
    #[serde(default)]
    pub options: Option<SplitOptions>,
    /// Build the split on a host that cannot drag.
    #[serde(default, rename = "static")]
    pub static_host: bool,
    #[serde(default)]
    pub steps: Vec<Step>,
}

fn default_extent() -> Size {
    Size::new(900.0, 400.0)
}

fn default_panes() -> usize {
    3
}

/// One replayed input. Positions are along the split axis.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Press { gutter: usize, at: f32 },
    Move { at: f32 },
    Touch { at: Vec<f32> },
    Release,
    Cancel,
    Collapse { pane: usize },
    SetSizes { sizes: Vec<f32> },
}

impl Step {
    fn label(&self) -> String {
        match self {
            Step::Press { gutter, at } => format!("press gutter {} at {}", gutter, at),
            Step::Move { at } => format!("move to {}", at),
            Step::Touch { at } => format!("touch {:?}", at),
            Step::Release => "release".to_string(),
            Step::Cancel => "cancel".to_string(),
            Step::Collapse { pane } => format!("collapse pane {}", pane),
            Step::SetSizes { sizes } => format!("set sizes {:?}", sizes),
        }
    }

    /// The input event this step feeds to the split, if it is one.
    fn event(&self, direction: SplitDirection) -> Option<SplitEvent> {
        let point = |at: f32| match direction {
            SplitDirection::Horizontal => Vec2::new(at, 0.0),
            SplitDirection::Vertical => Vec2::new(0.0, at),
        };
        match self {
            Step::Press { gutter, at } => Some(SplitEvent::GutterPress {
                gutter: *gutter,
                pointer: Pointer::Mouse {
                    position: point(*at),
                    button: MouseButton::Left,
                },
            }),
            Step::Move { at } => Some(SplitEvent::PointerMove {
                pointer: Pointer::Mouse {
                    position: point(*at),
                    button: MouseButton::Left,
                },
            }),
            Step::Touch { at } => Some(SplitEvent::PointerMove {
                pointer: Pointer::Touch {
                    touches: at.iter().map(|&a| point(a)).collect(),
                },
            }),
            Step::Release => Some(SplitEvent::PointerRelease),
            Step::Cancel => Some(SplitEvent::PointerCancel),
            Step::Collapse { .. } | Step::SetSizes { .. } => None,
        }
    }
}

/// Sizes after one step: percentages (interactive splits only) and the pixel
/// extent each pane ended up with.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub label: String,
    pub sizes: Option<Vec<f32>>,
    pub extents: Vec<f32>,
}

pub fn read_scenario(path: &Path) -> Result<Scenario, ScenarioError> {
    let content = std::fs::read_to_string(path).map_err(|source| ScenarioError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| ScenarioError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Replay `scenario` with `options`, reporting sizes after construction and
/// after every step. The split is destroyed at the end.
pub fn run(scenario: &Scenario, options: SplitOptions) -> Result<Vec<Report>, ScenarioError> {
    let direction = options.direction;
    let (mut host, ids) = HeadlessHost::with_panes(direction, scenario.extent, scenario.panes);
    host.set_drag_capable(!scenario.static_host);

    let panes: Vec<PaneRef> = ids.iter().copied().map(PaneRef::from).collect();
    let mut handle = SplitHandle::new(&mut host, &panes, options, SplitHooks::default())?;
    if !handle.is_interactive() {
        log::info!("replaying against a static split; drag steps have no effect");
    }

    let report = |label: String, handle: &SplitHandle, host: &HeadlessHost| Report {
        label,
        sizes: handle.get_sizes(),
        extents: ids.iter().map(|&id| host.extent(id)).collect(),
    };

    let mut reports = vec![report("initial".to_string(), &handle, &host)];
    for step in &scenario.steps {
        match step {
            Step::Collapse { pane } => handle.collapse(&mut host, *pane),
            Step::SetSizes { sizes } => handle.set_sizes(&mut host, sizes),
            _ => {
                if let Some(event) = step.event(direction) {
                    handle.handle_event(&mut host, &event);
                }
            }
        }
        reports.push(report(step.label(), &handle, &host));
    }

    handle.destroy(&mut host);
    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 0.01
    }

    #[test]
    fn test_parse_steps() {
        let scenario: Scenario = serde_json::from_str(
            r#"{
                "panes": 2,
                "steps": [
                    {"press": {"gutter": 0, "at": 450}},
                    {"move": {"at": 300}},
                    "release",
                    {"collapse": {"pane": 1}},
                    {"set_sizes": {"sizes": [40, 60]}}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(scenario.panes, 2);
        assert_eq!(scenario.extent, Size::new(900.0, 400.0));
        assert!(scenario.options.is_none());
        assert_eq!(scenario.steps[0], Step::Press { gutter: 0, at: 450.0 });
        assert_eq!(scenario.steps[2], Step::Release);
        assert_eq!(
            scenario.steps[4],
            Step::SetSizes {
                sizes: vec![40.0, 60.0]
            }
        );
    }

    #[test]
    fn test_run_reports_every_step() {
        let scenario: Scenario = serde_json::from_str(
            r#"{"panes": 2, "steps": [
                {"press": {"gutter": 0, "at": 450}},
                {"move": {"at": 300}},
                "release"
            ]}"#,
        )
        .unwrap();
        let reports = run(&scenario, SplitOptions::default()).unwrap();

        assert_eq!(reports.len(), 4);
        assert_eq!(reports[0].sizes, Some(vec![50.0, 50.0]));
        let moved = reports[2].sizes.as_ref().unwrap();
        assert!(approx_eq(moved[0], 300.0 / 900.0 * 100.0));
        assert!(approx_eq(reports[3].extents[0], 295.0));
    }

    #[test]
    fn test_run_vertical_touch() {
        let scenario: Scenario = serde_json::from_str(
            r#"{"extent": {"width": 300, "height": 600}, "panes": 2, "steps": [
                {"press": {"gutter": 0, "at": 300}},
                {"touch": {"at": [200, 550]}}
            ]}"#,
        )
        .unwrap();
        let options = SplitOptions {
            direction: SplitDirection::Vertical,
            ..Default::default()
        };
        let reports = run(&scenario, options).unwrap();
        let sizes = reports[2].sizes.as_ref().unwrap();
        assert!(approx_eq(sizes[0], 200.0 / 600.0 * 100.0));
    }

    #[test]
    fn test_static_scenario_has_no_sizes() {
        let scenario: Scenario =
            serde_json::from_str(r#"{"static": true, "steps": [{"collapse": {"pane": 0}}]}"#)
                .unwrap();
        let reports = run(&scenario, SplitOptions::default()).unwrap();
        assert!(reports.iter().all(|r| r.sizes.is_none()));
        assert!(approx_eq(reports[1].extents[0], 300.0));
    }

    #[test]
    fn test_run_propagates_split_errors() {
        let scenario: Scenario = serde_json::from_str(r#"{"panes": 0}"#).unwrap();
        assert!(matches!(
            run(&scenario, SplitOptions::default()),
            Err(ScenarioError::Split(SplitError::NoPanes))
        ));
    }

    #[test]
    fn test_read_scenario_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"panes": 4}}"#).unwrap();
        assert_eq!(read_scenario(file.path()).unwrap().panes, 4);

        let mut bad = tempfile::NamedTempFile::new().unwrap();
        write!(bad, "[").unwrap();
        assert!(matches!(
            read_scenario(bad.path()),
            Err(ScenarioError::Parse { .. })
        ));
    }
}
