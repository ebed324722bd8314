//! How pipetop draws to the terminal: two stacked sample graphs, CPU above
//! memory, with the status line carried on the CPU graph's title.

pub mod components;

use std::{borrow::Cow, io::Stdout};

use tui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    symbols::Marker,
    Frame, Terminal,
};

use crate::{
    app::App,
    canvas::components::sample_graph::{GraphData, SampleGraph},
    utils::error,
};

/// Fixed bounds on both charts. 110 keeps a 100% line visibly below the top
/// edge instead of clipped against it.
const Y_BOUNDS: [f64; 2] = [0.0, 110.0];
const Y_LABELS: [Cow<'static, str>; 2] = [Cow::Borrowed("  0%"), Cow::Borrowed("110%")];

#[derive(Debug)]
pub(crate) struct CanvasStyles {
    pub cpu_style: Style,
    pub mem_style: Style,
    pub graph_style: Style,
    pub border_style: Style,
    pub widget_title_style: Style,
}

impl Default for CanvasStyles {
    fn default() -> Self {
        CanvasStyles {
            cpu_style: Style::default().fg(Color::Blue),
            mem_style: Style::default().fg(Color::Green),
            graph_style: Style::default().fg(Color::Gray),
            border_style: Style::default().fg(Color::Gray),
            widget_title_style: Style::default().fg(Color::Cyan),
        }
    }
}

/// Handles the canvas' state.
pub struct Painter {
    styles: CanvasStyles,
}

impl Painter {
    pub fn init() -> Self {
        Painter {
            styles: CanvasStyles::default(),
        }
    }

    pub fn draw_data(
        &self, terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &App,
    ) -> error::Result<()> {
        terminal.draw(|f| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(f.area());

            self.draw_cpu_graph(f, app, chunks[0]);
            self.draw_mem_graph(f, app, chunks[1]);
        })?;

        Ok(())
    }

    fn draw_cpu_graph(&self, f: &mut Frame<'_>, app: &App, draw_loc: Rect) {
        let graph_data = [GraphData {
            points: &app.canvas_data.cpu_points,
            style: self.styles.cpu_style,
            name: Some("CPU %".into()),
        }];

        self.sample_graph(app, Cow::Borrowed(app.canvas_data.title.as_str()))
            .draw_sample_graph(f, draw_loc, &graph_data);
    }

    fn draw_mem_graph(&self, f: &mut Frame<'_>, app: &App, draw_loc: Rect) {
        let graph_data = [GraphData {
            points: &app.canvas_data.mem_points,
            style: self.styles.mem_style,
            name: Some("Memory %".into()),
        }];

        self.sample_graph(app, " Memory ".into())
            .draw_sample_graph(f, draw_loc, &graph_data);
    }

    fn sample_graph<'a>(&self, app: &App, title: Cow<'a, str>) -> SampleGraph<'a> {
        let marker = if app.app_config_fields.use_dot {
            Marker::Dot
        } else {
            Marker::Braille
        };

        SampleGraph {
            x_bounds: [
                0.0,
                app.app_config_fields.history_capacity.saturating_sub(1) as f64,
            ],
            y_bounds: Y_BOUNDS,
            y_labels: &Y_LABELS,
            graph_style: self.styles.graph_style,
            border_style: self.styles.border_style,
            title,
            title_style: self.styles.widget_title_style,
            legend_constraints: None,
            marker,
        }
    }
}
