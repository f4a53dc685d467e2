use euclid_vector::{AngleUnit, Vector};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("📐 Euclidean Vector Demo");
    println!("========================\n");

    // Magnitudes
    let v1 = Vector::new([-0.221, 7.437])?;
    println!("|{}| = {}", v1, v1.magnitude());

    let v2 = Vector::new([8.813, -1.331, -6.247])?;
    println!("|{}| = {}", v2, v2.magnitude());

    // Directions
    let v3 = Vector::new([5.581, -2.136])?;
    println!("\nnormalized {} = {}", v3, v3.normalized()?);

    let v4 = Vector::new([1.996, 3.108, -4.554])?;
    println!("normalized {} = {}", v4, v4.normalized()?);

    // Angles, projections and cross products
    let a = Vector::new([7.35, 0.221, 5.188])?;
    let b = Vector::new([2.751, 8.259, 3.985])?;
    println!("\nangle between {} and {}: {:.4}°", a, b, a.angle_with(&b, AngleUnit::Degrees)?);
    println!("projection of {} onto {}: {}", a, b, a.component_parallel_to(&b)?);
    println!("{} x {} = {}", a, b, a.cross(&b)?);

    // Failures come back as errors, not panics
    let zero = Vector::new([0.0, 0.0])?;
    if let Err(e) = zero.normalized() {
        println!("\n⚠️  {}", e);
    }
    if let Err(e) = v1.plus(&v2) {
        println!("⚠️  {}", e);
    }

    println!("\n✅ Demo completed successfully!");
    Ok(())
}
