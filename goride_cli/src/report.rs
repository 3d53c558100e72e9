use comfy_table::Table;
use goride_optimizer::solver::solver_params::{AssignmentStrategy, SolverParams};
use jiff::SignedDuration;
use serde::Serialize;

const NAME_WIDTH: usize = 20;

#[derive(Debug, Clone, Serialize)]
pub struct InstanceReport {
    pub name: String,
    pub score: u64,
    pub max_score: u64,
    pub cars: usize,
    pub rides: usize,
    pub assigned: usize,
    pub duration: SignedDuration,
}

#[derive(Debug, Clone, Serialize)]
pub struct DatasetReport {
    pub strategy: AssignmentStrategy,
    pub alpha: f64,
    pub beta: f64,
    pub instances: Vec<InstanceReport>,
    pub total: u64,
}

impl DatasetReport {
    pub fn new(params: &SolverParams, instances: Vec<InstanceReport>) -> Self {
        DatasetReport {
            strategy: params.strategy,
            alpha: params.alpha,
            beta: params.beta,
            total: instances.iter().map(|instance| instance.score).sum(),
            instances,
        }
    }

    /// One `name: score` line per instance, names padded to a fixed width,
    /// followed by the total.
    pub fn to_text(&self) -> String {
        let mut text = String::new();

        for instance in &self.instances {
            text.push_str(&format_line(&format!("{}:", instance.name), instance.score));
        }
        text.push_str(&format_line("total:", self.total));

        text
    }

    pub fn to_table(&self) -> Table {
        let mut table = Table::new();
        table.set_header(vec!["Instance", "Score", "Max score", "Assigned", "Duration"]);

        for instance in &self.instances {
            table.add_row(vec![
                instance.name.clone(),
                instance.score.to_string(),
                instance.max_score.to_string(),
                format!("{}/{}", instance.assigned, instance.rides),
                format!("{:#}", instance.duration),
            ]);
        }

        table.add_row(vec![
            String::from("total"),
            self.total.to_string(),
            self.instances
                .iter()
                .map(|instance| instance.max_score)
                .sum::<u64>()
                .to_string(),
            String::new(),
            String::new(),
        ]);

        table
    }
}

fn format_line(label: &str, score: u64) -> String {
    format!("{label:<width$} {score}\n", width = NAME_WIDTH)
}
