//! Build the three navigation instances from the benchmark paper and print
//! their size plus the initial points a simulation would be seeded from.
//!
//! Usage:
//!   cargo run -p hybrid --example nav_corners

use hybrid::nav::{build_nav, parse_cells, NavParams};
use hybrid::seed::{seed_points, ReplayToken, SeedCfg};

struct Instance {
    name: &'static str,
    matrix: [f64; 4],
    cells: &'static [&'static str],
    width: usize,
    start: (f64, f64),
}

const INSTANCES: &[Instance] = &[
    Instance {
        name: "nav_fig1b",
        matrix: [-1.2, 0.1, 0.1, -1.2],
        cells: &["2", "2", "A", "4", "3", "4", "B", "2", "4"],
        width: 3,
        start: (0.5, 1.5),
    },
    Instance {
        name: "nav_fig2a",
        matrix: [-0.8, -0.2, -0.1, -0.8],
        cells: &[
            "2", "A", "0", "0", "0", "2", "4", "6", "6", "6", "2", "4", "B", "3", "4", "2", "4",
            "7", "7", "4", "2", "4", "6", "6", "6",
        ],
        width: 5,
        start: (3.5, 3.5),
    },
    Instance {
        name: "nav_fig2b",
        matrix: [-1.2, 0.1, 0.2, -1.2],
        cells: &[
            "3", "0", "0", "6", "6", "3", "0", "0", "B", "4", "4", "2", "1", "1", "4", "4", "A",
            "1", "1", "4", "4", "6", "6", "6", "4",
        ],
        width: 5,
        start: (3.5, 3.5),
    },
];

fn main() {
    let cfg = SeedCfg {
        rand: 100,
        ..SeedCfg::default()
    };
    for inst in INSTANCES {
        let cells = match parse_cells(inst.cells) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("{}: {e}", inst.name);
                continue;
            }
        };
        let mut params = NavParams::new(inst.matrix.to_vec(), cells, inst.width, inst.start);
        params.noise = 0.1;
        let nav = match build_nav(&params) {
            Ok(n) => n,
            Err(e) => {
                eprintln!("{}: {e}", inst.name);
                continue;
            }
        };
        let ha = &nav.automaton;
        let pts = seed_points(&nav.init, &cfg, ReplayToken { seed: 2016, index: 0 });
        let start = ha.mode(nav.start_mode).map(|m| m.name()).unwrap_or("?");
        println!(
            "{}: {}x{} grid, modes={}, transitions={}, start={}, seed points={}",
            inst.name,
            nav.width(),
            nav.height(),
            ha.num_modes(),
            ha.transitions().len(),
            start,
            pts.len()
        );
    }
}
