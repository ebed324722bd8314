//! Application state: the sample buffers, the latest host info, and the
//! converted data the canvas draws from.

pub mod history;

use crate::{app::history::MetricHistory, collection::Data, options::AppConfigFields};

/// Chart-ready state, rebuilt once per successful tick.
#[derive(Clone, Debug, Default)]
pub struct CanvasData {
    pub cpu_points: Vec<(f64, f64)>,
    pub mem_points: Vec<(f64, f64)>,
    pub title: String,
}

/// Everything the render loop owns. The buffers are fields here rather than
/// process-wide state so several independent monitors could coexist in one
/// process.
pub struct App {
    pub cpu_history: MetricHistory,
    pub mem_history: MetricHistory,
    pub load_history: MetricHistory,

    /// Last process count received from the pipe. No history.
    pub proc_count: u32,
    pub uptime: String,
    pub total_processes: usize,

    pub canvas_data: CanvasData,
    pub app_config_fields: AppConfigFields,
}

impl App {
    pub fn new(app_config_fields: AppConfigFields) -> Self {
        let capacity = app_config_fields.history_capacity;
        let mut app = App {
            cpu_history: MetricHistory::new(capacity),
            mem_history: MetricHistory::new(capacity),
            load_history: MetricHistory::new(capacity),
            proc_count: 0,
            uptime: "unknown".to_owned(),
            total_processes: 0,
            canvas_data: CanvasData::default(),
            app_config_fields,
        };
        app.refresh_canvas_data();

        app
    }

    /// Applies one harvested payload: buffers advance, the process count is
    /// overwritten, and the title is recomposed from fresh host data.
    pub fn eat_data(&mut self, data: Data) {
        self.cpu_history.push(data.sample.cpu);
        self.mem_history.push(data.sample.mem);
        self.load_history.push(data.sample.load);
        self.proc_count = data.sample.proc_count;
        self.uptime = data.uptime;
        self.total_processes = data.total_processes;

        self.refresh_canvas_data();
    }

    /// Returns all buffers to their initial zero state.
    pub fn reset(&mut self) {
        self.cpu_history.clear();
        self.mem_history.clear();
        self.load_history.clear();
        self.proc_count = 0;
        self.uptime = "unknown".to_owned();
        self.total_processes = 0;

        self.refresh_canvas_data();
    }

    fn refresh_canvas_data(&mut self) {
        self.canvas_data.cpu_points = self.cpu_history.points();
        self.canvas_data.mem_points = self.mem_history.points();
        self.canvas_data.title = status_title(
            self.load_history.last(),
            self.proc_count,
            self.total_processes,
            &self.uptime,
        );
    }
}

/// Composes the status line shown above the CPU chart.
fn status_title(load: f64, piped_procs: u32, total_procs: usize, uptime: &str) -> String {
    format!(
        "CPU Usage  |  Load Avg: {load:.2}  |  From Pipe: {piped_procs} procs  |  Total: {total_procs} procs  |  Uptime: {uptime}"
    )
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::collection::Sample;

    fn test_config() -> AppConfigFields {
        AppConfigFields {
            update_rate_in_milliseconds: 500,
            pipe_path: "/tmp/sysmon_pipe".into(),
            history_capacity: 50,
            use_dot: false,
        }
    }

    fn payload(cpu: f64, mem: f64, load: f64, proc_count: u32) -> Data {
        Data {
            sample: Sample {
                cpu,
                mem,
                load,
                proc_count,
            },
            uptime: "1h 2m 5s".to_owned(),
            total_processes: 150,
        }
    }

    #[test]
    fn title_carries_all_four_values() {
        let title = status_title(1.23, 42, 150, "1h 2m 5s");
        assert!(title.contains("1.23"));
        assert!(title.contains("42"));
        assert!(title.contains("150"));
        assert!(title.contains("1h 2m 5s"));
    }

    #[test]
    fn load_is_formatted_to_two_decimals() {
        assert!(status_title(1.2, 0, 0, "unknown").contains("Load Avg: 1.20"));
        assert!(status_title(0.756, 0, 0, "unknown").contains("Load Avg: 0.76"));
    }

    #[test]
    fn eating_data_advances_every_buffer() {
        let mut app = App::new(test_config());
        app.eat_data(payload(12.5, 34.2, 1.23, 42));

        assert_eq!(app.cpu_history.last(), 12.5);
        assert_eq!(app.mem_history.last(), 34.2);
        assert_eq!(app.load_history.last(), 1.23);
        assert_eq!(app.proc_count, 42);
        assert_eq!(app.cpu_history.len(), 50);
        assert!(app.canvas_data.title.contains("1.23"));
        assert!(app.canvas_data.title.contains("Total: 150 procs"));
    }

    #[test]
    fn a_tick_without_data_changes_nothing() {
        let mut app = App::new(test_config());
        app.eat_data(payload(12.5, 34.2, 1.23, 42));

        let cpu_before = app.canvas_data.cpu_points.clone();
        let title_before = app.canvas_data.title.clone();

        // A failed read never reaches eat_data; the draw tick just renders
        // the existing state again.
        assert_eq!(app.canvas_data.cpu_points, cpu_before);
        assert_eq!(app.canvas_data.title, title_before);
        assert_eq!(app.proc_count, 42);
    }

    #[test]
    fn reset_returns_to_the_initial_frame() {
        let mut app = App::new(test_config());
        app.eat_data(payload(50.0, 60.0, 2.5, 10));
        app.reset();

        assert_eq!(app.cpu_history.last(), 0.0);
        assert_eq!(app.proc_count, 0);
        assert!(app.canvas_data.title.contains("Load Avg: 0.00"));
        assert_eq!(app.canvas_data.cpu_points.len(), 50);
    }
}
