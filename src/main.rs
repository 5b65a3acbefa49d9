use planar_voronoi::*;
use tracing::warn;
use tracing_subscriber::EnvFilter;

fn parse_point(arg: &str) -> Option<Point> {
    let (x, y) = arg.split_once(',')?;
    Some(Point::new(x.trim().parse().ok()?, y.trim().parse().ok()?))
}

fn main() -> Result<(), DiagramError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // usage: planar_voronoi WIDTHxHEIGHT x,y [x,y ...]
    let mut args = std::env::args().skip(1);
    let bounds = args
        .next()
        .and_then(|s| {
            let (w, h) = s.split_once('x')?;
            Some(Bounds::new(w.parse().ok()?, h.parse().ok()?))
        })
        .unwrap_or(Bounds::new(400.0, 300.0));

    let points: Vec<Point> = args
        .filter_map(|arg| match parse_point(&arg) {
            Some(p) => Some(p),
            None => {
                warn!(%arg, "ignoring argument, expected x,y");
                None
            }
        })
        .collect();

    let mut session = DiagramSession::new(bounds)?;
    for p in &points {
        session.add_point(*p);
    }

    let hull = session.hull();
    println!("hull ({}):", hull.len());
    for p in hull.vertices() {
        println!("  {p}");
    }

    println!("triangles ({}):", session.triangles().len());
    for t in session.triangles() {
        println!("  {} {} {} -> center {} r {:.3}", t.a(), t.b(), t.c(), t.center(), t.radius());
    }

    let edges = unique_voronoi_edges(Some(session.triangles()))?;
    println!("voronoi edges ({}):", edges.len());
    for e in &edges {
        println!("  {e}");
    }

    Ok(())
}
