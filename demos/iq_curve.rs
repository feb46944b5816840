/*
MIT License

Copyright (c) 2025 Ameyanagi

Model formulations adapted from published SasView marketplace kernels.
Copyright of the original models remains with their respective authors.
*/

//! Example I(q) curves
//!
//! This example evaluates a few representative models over a logarithmic
//! q grid and prints the curves as a plain table.

use anyhow::Result;
use sasff_rs::models::{FiveLayerBicelle, FourLayerStack, Slab, StarPolymer, Substrate};
use sasff_rs::sweep::sweep_iq;

fn log_grid(q_min: f64, q_max: f64, n: usize) -> Vec<f64> {
    let step = (q_max / q_min).ln() / (n - 1) as f64;
    (0..n).map(|i| q_min * (i as f64 * step).exp()).collect()
}

fn main() -> Result<()> {
    let grid = log_grid(0.002, 0.5, 30);

    let bicelle = FiveLayerBicelle {
        radius: 150.0,
        thick_rim: 18.0,
        thick_face: 10.0,
        methylene_length: 12.0,
        methyl_length: 2.0,
        sld_methylene: -0.37,
        sld_methyl: -0.9,
        sld_face: 1.8,
        sld_rim: 1.5,
        sld_solvent: 6.36,
    };

    let star = StarPolymer {
        rg: 100.0,
        arms: 5.0,
    };

    let mirror = FourLayerStack {
        sld_cap: 0.0,
        slabs: [
            Slab {
                sld: 0.0,
                thickness: 0.0,
                roughness: 0.0,
            },
            Slab {
                sld: 0.0,
                thickness: 0.0,
                roughness: 0.0,
            },
            Slab {
                sld: 0.0,
                thickness: 0.0,
                roughness: 0.0,
            },
            Slab {
                sld: 2.0,
                thickness: 100.0,
                roughness: 10.0,
            },
        ],
        substrate: Substrate {
            sld: 2.07,
            roughness: 10.0,
        },
    };

    let bicelle_curve = sweep_iq("bicelle", &grid, |q| bicelle.iq(q));
    let star_curve = sweep_iq("star_polymer", &grid, |q| star.iq(q));
    let mirror_curve = sweep_iq("reflectivity", &grid, |q| mirror.iq(q));

    println!(
        "{:>10} {:>14} {:>14} {:>14}",
        "q (1/A)", "bicelle", "star", "reflectivity"
    );
    for (i, &q) in grid.iter().enumerate() {
        println!(
            "{:>10.5} {:>14.6e} {:>14.6e} {:>14.6e}",
            q, bicelle_curve[i], star_curve[i], mirror_curve[i]
        );
    }

    Ok(())
}
