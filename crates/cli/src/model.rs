//! JSON documents handed to the simulation engine.
//!
//! The automaton's callables cannot be serialized; the document carries the
//! structure (modes, transition labels and endpoints), the initial region with
//! its seeded points, and the engine settings.

use hybrid::api::{seed_points, transition_table, HyperRectangle, NavBenchmark, State};
use hybrid::nav::NAV_VARIABLES;
use serde::Serialize;

use crate::settings::EngineSettings;

#[derive(Debug, Serialize)]
pub struct ModelDoc {
    pub system_id: String,
    pub variables: Vec<String>,
    pub modes: Vec<ModeDoc>,
    pub transitions: Vec<TransitionDoc>,
    pub init: InitDoc,
    /// Disturbance bound on the velocity derivatives.
    pub noise: f64,
    pub settings: EngineSettings,
}

#[derive(Debug, Serialize)]
pub struct ModeDoc {
    pub name: String,
    pub forbidden: bool,
    pub transitions: Vec<String>,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct TransitionDoc {
    pub label: String,
    pub from: String,
    pub to: String,
}

#[derive(Debug, Serialize)]
pub struct InitDoc {
    pub mode: String,
    pub bounds: Vec<[f64; 2]>,
    pub points: Vec<Vec<f64>>,
}

/// Center, star points and unique corners of one box.
#[derive(Debug, Serialize)]
pub struct BoxDoc {
    pub bounds: Vec<[f64; 2]>,
    pub center: Vec<f64>,
    pub star: Vec<Vec<f64>>,
    pub corners: Vec<Vec<f64>>,
}

fn coords(p: &State) -> Vec<f64> {
    p.iter().copied().collect()
}

fn bounds(r: &HyperRectangle) -> Vec<[f64; 2]> {
    r.dims().iter().map(|d| [d.lo, d.hi]).collect()
}

pub fn box_document(r: &HyperRectangle, tol: f64) -> BoxDoc {
    BoxDoc {
        bounds: bounds(r),
        center: coords(&r.center()),
        star: r.star().iter().map(coords).collect(),
        corners: r.corners(tol).map(|p| coords(&p)).collect(),
    }
}

pub fn nav_document(nav: &NavBenchmark, settings: &EngineSettings) -> ModelDoc {
    let ha = &nav.automaton;
    let modes = ha
        .modes()
        .map(|m| ModeDoc {
            name: m.name().to_string(),
            forbidden: nav.is_forbidden(m.id()),
            transitions: ha.outgoing(m.id()).map(|t| t.to_string()).collect(),
        })
        .collect();
    let transitions = transition_table(ha)
        .into_iter()
        .map(|(label, from, to)| TransitionDoc { label, from, to })
        .collect();
    let points = seed_points(&nav.init, &settings.seed_cfg(), settings.replay_token());
    let start = ha
        .mode(nav.start_mode)
        .map(|m| m.name().to_string())
        .unwrap_or_default();

    ModelDoc {
        system_id: settings
            .system_id
            .clone()
            .unwrap_or_else(|| "nav".to_string()),
        variables: NAV_VARIABLES.iter().map(|v| v.to_string()).collect(),
        modes,
        transitions,
        init: InitDoc {
            mode: start,
            bounds: bounds(&nav.init),
            points: points.iter().map(coords).collect(),
        },
        noise: nav.noise,
        settings: settings.clone(),
    }
}
