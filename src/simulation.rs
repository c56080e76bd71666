use std::collections::VecDeque;
use std::time::Duration;

use async_channel::Sender;
use rand_distr::{Distribution, Uniform};
use tokio::task::JoinHandle;

use crate::external::{PositionEvent, PositionProvider, Subscription};

pub trait DriftSource: Send {
    fn next_offset(&mut self) -> (f64, f64);
}

#[derive(Clone, Debug)]
pub struct UniformDrift {
    dist: Uniform<f64>,
}

impl UniformDrift {
    pub fn new(max: f64) -> Self {
        let max = max.abs();

        Self {
            dist: Uniform::new_inclusive(-max, max),
        }
    }
}

impl DriftSource for UniformDrift {
    fn next_offset(&mut self) -> (f64, f64) {
        let mut rng = rand::thread_rng();

        (self.dist.sample(&mut rng), self.dist.sample(&mut rng))
    }
}

#[derive(Clone, Debug, Default)]
pub struct ScriptedDrift {
    offsets: VecDeque<(f64, f64)>,
}

impl ScriptedDrift {
    pub fn new(offsets: Vec<(f64, f64)>) -> Self {
        Self {
            offsets: offsets.into(),
        }
    }
}

impl DriftSource for ScriptedDrift {
    fn next_offset(&mut self) -> (f64, f64) {
        self.offsets.pop_front().unwrap_or((0.0, 0.0))
    }
}

#[derive(Clone, Debug)]
pub struct SimulatedPositionProvider {
    party_ids: Vec<String>,
    period: Duration,
}

impl SimulatedPositionProvider {
    pub fn new(party_ids: Vec<String>, period: Duration) -> Self {
        Self { party_ids, period }
    }
}

impl PositionProvider for SimulatedPositionProvider {
    #[tracing::instrument(name = "SimulatedPositionProvider::subscribe", skip_all)]
    fn subscribe(&self, sender: Sender<PositionEvent>) -> Box<dyn Subscription> {
        let party_ids = self.party_ids.clone();
        let period = self.period;

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            // the first tick completes immediately
            interval.tick().await;

            loop {
                interval.tick().await;

                for party_id in party_ids.iter() {
                    let event = PositionEvent::Drift {
                        party_id: party_id.clone(),
                    };

                    if sender.send(event).await.is_err() {
                        tracing::info!("position feed closed, stopping drift ticks");
                        return;
                    }
                }
            }
        });

        Box::new(TaskSubscription::new(handle))
    }
}

#[derive(Debug)]
pub struct TaskSubscription {
    handle: Option<JoinHandle<()>>,
}

impl TaskSubscription {
    pub fn new(handle: JoinHandle<()>) -> Self {
        Self {
            handle: Some(handle),
        }
    }
}

impl Subscription for TaskSubscription {
    fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

impl Drop for TaskSubscription {
    fn drop(&mut self) {
        self.cancel();
    }
}
