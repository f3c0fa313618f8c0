use anyhow::Result;
use scalarsearch::{Annealer, Bounds, Minimize};

const SAMPLES: [(f64, f64); 11] = [
    (1.0, 10119.0),
    (2.0, 11642.0),
    (3.0, 9437.0),
    (4.0, 9529.0),
    (5.0, 45199.0),
    (6.0, 11367.0),
    (7.0, 14365.0),
    (8.0, 24906.0),
    (9.0, 32231.0),
    (10.0, 31935.0),
    (11.0, 33510.0),
];

fn main() -> Result<()> {
    let annealer = Annealer::default();
    let bounds = Bounds::new(2000.0, 5000.0)?;
    let mut rng = rand::rng();

    let slope_mse = Minimize(|a: f64| {
        let sum: f64 = SAMPLES.iter().map(|&(x, y)| (a * x - y).powi(2)).sum();
        sum / SAMPLES.len() as f64
    });
    let slope_run = annealer.solve(&slope_mse, 100, 0.99, 2000.0, bounds, &mut rng)?;
    let a = slope_run.best_x;
    println!("best slope for y = a*x");
    println!("a : {a}");
    println!("mean squared error : {}", slope_run.best_quality);

    let intercept_mse = Minimize(move |b: f64| {
        let sum: f64 = SAMPLES
            .iter()
            .map(|&(x, y)| (a * x + b - y).powi(2))
            .sum::<f64>();
        sum / SAMPLES.len() as f64
    });
    let intercept_run = annealer.solve(&intercept_mse, 100, 0.99, 2000.0, bounds, &mut rng)?;
    println!();
    println!("best intercept for y = a*x + b");
    println!("a : {a}");
    println!("b : {}", intercept_run.best_x);
    println!("mean squared error : {}", intercept_run.best_quality);
    Ok(())
}
