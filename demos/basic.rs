use planar_voronoi::*;

fn main() {
    let points: Vec<Point> = vec![
        (120.0, 80.0).into(),
        (300.0, 150.0).into(),
        (210.0, 260.0).into(),
        (90.0, 220.0).into(),
    ];

    let triangulation = triangulate(&points, Bounds::new(400.0, 300.0)).expect("triangulate");

    println!("{:?}", compute_hull(&points).vertices());
    println!("{:?}", triangulation.triangles());
    println!(
        "{:?}",
        unique_voronoi_edges(Some(triangulation.triangles())).expect("voronoi")
    );
}
