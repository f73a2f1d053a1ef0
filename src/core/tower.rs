use crate::core::airport::Airport;
use crate::domain::model::{AirportSnapshot, Operation, Plane, PlaneId};
use crate::domain::ports::WeatherService;
use serde::Serialize;

/// Outcome of one scripted operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepOutcome {
    pub step: usize,
    pub operation: Operation,
    pub plane: Option<PlaneId>,
    pub error: Option<String>,
}

impl StepOutcome {
    pub fn accepted(&self) -> bool {
        self.error.is_none()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TowerReport {
    pub steps: Vec<StepOutcome>,
    pub airport: AirportSnapshot,
}

impl TowerReport {
    pub fn refused(&self) -> usize {
        self.steps.iter().filter(|s| !s.accepted()).count()
    }
}

/// Drives an airport through a sequence of operations.
///
/// `Land` brings in a fresh flying plane; `TakeOff` launches the most
/// recent arrival. A refused step is recorded and the run carries on.
pub struct ControlTower<W: WeatherService> {
    airport: Airport<W>,
}

impl<W: WeatherService> ControlTower<W> {
    pub fn new(airport: Airport<W>) -> Self {
        Self { airport }
    }

    pub fn airport(&self) -> &Airport<W> {
        &self.airport
    }

    pub fn into_airport(self) -> Airport<W> {
        self.airport
    }

    pub fn run(&mut self, operations: &[Operation]) -> TowerReport {
        tracing::info!(
            airport = %self.airport.name(),
            steps = operations.len(),
            "Starting scripted run"
        );

        let steps = operations
            .iter()
            .enumerate()
            .map(|(index, &operation)| self.step(index + 1, operation))
            .collect::<Vec<_>>();

        let report = TowerReport {
            steps,
            airport: self.airport.snapshot(),
        };

        tracing::info!(
            airport = %self.airport.name(),
            parked = report.airport.parked.len(),
            refused = report.refused(),
            "Scripted run finished"
        );
        report
    }

    fn step(&mut self, step: usize, operation: Operation) -> StepOutcome {
        let result = match operation {
            Operation::Land => {
                let plane = Plane::new(true);
                self.airport.land(&plane).map(|()| plane.id())
            }
            Operation::TakeOff => self.airport.take_off_latest().map(|plane| plane.id()),
        };

        match result {
            Ok(id) => StepOutcome {
                step,
                operation,
                plane: Some(id),
                error: None,
            },
            Err(e) => StepOutcome {
                step,
                operation,
                plane: None,
                error: Some(e.to_string()),
            },
        }
    }
}
