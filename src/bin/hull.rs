// Thin I/O harness around the library: reads whitespace-separated point
// coordinates (x y pairs) from stdin, or from a file given as the first
// argument, and prints hull statistics with fixed precision.
use std::env;
use std::fs;
use std::io::{self, Read};

use planar::algorithms::convex_hull;
use planar::data::Point;

fn main() -> Result<(), Box<dyn std::error::Error>> {
  let input = match env::args().nth(1) {
    Some(path) => fs::read_to_string(path)?,
    None => {
      let mut buf = String::new();
      io::stdin().read_to_string(&mut buf)?;
      buf
    }
  };

  let coords: Vec<f64> = input
    .split_whitespace()
    .map(str::parse)
    .collect::<Result<_, _>>()?;
  let points: Vec<Point<f64>> = coords
    .chunks_exact(2)
    .map(|c| Point::new(c[0], c[1]))
    .collect();

  let hull = convex_hull(points)?;
  println!("vertices:  {}", hull.len());
  println!("area:      {:.8}", hull.signed_area());
  println!("perimeter: {:.8}", hull.perimeter());
  println!("diameter2: {:.8}", hull.diameter2());
  Ok(())
}
