use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use scalarsearch::{Annealer, Bounds, Objective, callback::Progress};

struct CubicPeak;

impl Objective for CubicPeak {
    fn evaluate(&self, x: f64) -> f64 {
        x.powi(3) - 15.0 * x.powi(2) - 72.0 * x + 110.0
    }

    fn prefers(&self, a: f64, b: f64) -> bool {
        a > b
    }
}

fn main() -> Result<()> {
    let n_levels = 100;
    let annealer = Annealer::new(100.0, n_levels)?;
    let bounds = Bounds::new(-15.0, 15.0)?;

    let pb = ProgressBar::new(n_levels as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} {msg} ",
            )?
            .progress_chars("#>-"),
    );
    let mut callback = |p: Progress| {
        pb.set_message(format!(
            "best {:.4} (quality {:.4}), T = {:.2e}",
            p.best_x,
            p.best_quality.into_inner(),
            p.temperature
        ));
        pb.set_position(p.level as u64 + 1);
    };

    let mut rng = rand::rng();
    let run = annealer.solve_with(&CubicPeak, 100, 0.99, 0.0, bounds, &mut rng, &mut callback)?;
    pb.finish_using_style();

    println!(
        "f(x) : x^3 - 15x^2 - 72x + 110 on [{}, {}]",
        bounds.lo(),
        bounds.hi()
    );
    println!("best x : {}", run.best_x);
    println!("best quality : {}", run.best_quality);
    println!("accepted moves : {}", run.accepted);
    println!("history : {}", run.history);
    Ok(())
}
