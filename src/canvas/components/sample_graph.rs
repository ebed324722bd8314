use std::borrow::Cow;

use tui::{
    layout::{Constraint, Rect},
    style::Style,
    symbols::Marker,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, LegendPosition},
    Frame,
};

pub const DEFAULT_LEGEND_CONSTRAINTS: (Constraint, Constraint) =
    (Constraint::Ratio(3, 4), Constraint::Ratio(3, 4));

/// Represents the data required by the [`SampleGraph`].
pub struct GraphData<'a> {
    pub points: &'a [(f64, f64)],
    pub style: Style,
    pub name: Option<Cow<'a, str>>,
}

/// A scrolling line graph over sample indices. Unlike a time graph, the x
/// axis is the position of a sample in its buffer, so horizontal spacing
/// carries no wall-clock meaning and x labels are never drawn.
pub struct SampleGraph<'a> {
    /// The min and max x boundaries, as sample indices.
    pub x_bounds: [f64; 2],

    /// The min and max y boundaries.
    pub y_bounds: [f64; 2],

    /// Any y-labels.
    pub y_labels: &'a [Cow<'a, str>],

    /// The graph style.
    pub graph_style: Style,

    /// The border style.
    pub border_style: Style,

    /// The graph title.
    pub title: Cow<'a, str>,

    /// The title style.
    pub title_style: Style,

    /// Any legend constraints.
    pub legend_constraints: Option<(Constraint, Constraint)>,

    /// The marker type, shared by every dataset on the graph.
    pub marker: Marker,
}

impl SampleGraph<'_> {
    /// Generates the [`Axis`] for the x-axis.
    fn generate_x_axis(&self) -> Axis<'_> {
        Axis::default().bounds(self.x_bounds)
    }

    /// Generates the [`Axis`] for the y-axis.
    fn generate_y_axis(&self) -> Axis<'_> {
        Axis::default()
            .bounds(self.y_bounds)
            .style(self.graph_style)
            .labels(
                self.y_labels
                    .iter()
                    .map(|label| Span::styled(label.clone(), self.graph_style))
                    .collect::<Vec<_>>(),
            )
    }

    /// Draws the graph at the [`Rect`] location provided by `draw_loc`.
    pub fn draw_sample_graph(
        &self, f: &mut Frame<'_>, draw_loc: Rect, graph_data: &[GraphData<'_>],
    ) {
        let x_axis = self.generate_x_axis();
        let y_axis = self.generate_y_axis();

        let data = graph_data
            .iter()
            .map(|data| create_dataset(data, self.marker))
            .collect();
        let block = Block::default()
            .title(Span::styled(self.title.as_ref(), self.title_style))
            .borders(Borders::ALL)
            .border_style(self.border_style);

        f.render_widget(
            Chart::new(data)
                .block(block)
                .x_axis(x_axis)
                .y_axis(y_axis)
                .legend_position(Some(LegendPosition::TopRight))
                .hidden_legend_constraints(
                    self.legend_constraints
                        .unwrap_or(DEFAULT_LEGEND_CONSTRAINTS),
                ),
            draw_loc,
        )
    }
}

/// Creates a new [`Dataset`].
fn create_dataset<'a>(data: &'a GraphData<'a>, marker: Marker) -> Dataset<'a> {
    let GraphData {
        points,
        style,
        name,
    } = data;

    let dataset = Dataset::default()
        .style(*style)
        .data(points)
        .graph_type(GraphType::Line)
        .marker(marker);

    if let Some(name) = name {
        dataset.name(name.as_ref())
    } else {
        dataset
    }
}
