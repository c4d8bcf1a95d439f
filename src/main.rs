//! curvegen CLI — evaluate curves and surfaces into OpenInventor scenes.

use std::fs::File;
use std::io::{self, BufReader, Write};

use clap::{Args, Parser, Subcommand};

use curvegen::cuboid::Cuboid;
use curvegen::error::{Error, Result};
use curvegen::hierarchy::{CuboidFrame, PointMarker, SceneNode};
use curvegen::math::matrix::Matrix;
use curvegen::math::point3::Point3;
use curvegen::math::scalar::to_rad;
use curvegen::{io as points_io, scene, transforms};
use curvegen::{BezierCurve, BezierPatch, CatmullRom, Mesh, Sellipsoid};

#[derive(Parser)]
#[command(name = "curvegen")]
#[command(version, about = "Parametric curve and surface evaluation to OpenInventor scenes")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Shading selection shared by the surface subcommands. Flat is the
/// default; the two flags are mutually exclusive.
#[derive(Args)]
struct Shading {
    /// Emit per-vertex analytic normals for smooth shading.
    #[arg(short = 'S', long, conflicts_with = "flat")]
    smooth: bool,

    /// Flat shading (the default); normals are omitted.
    #[arg(short = 'F', long)]
    flat: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Sample a Bezier curve from a control-point file.
    Curve {
        /// Path to the control points (one `x y z` per line).
        #[arg(short, long, default_value = "cpts_in.txt")]
        file: String,

        /// Parameter increment in (0, 1].
        #[arg(short = 'u', long, default_value_t = 0.09)]
        inc: f64,

        /// Radius for the control-point marker spheres.
        #[arg(short, long, default_value_t = 0.1)]
        radius: f64,
    },

    /// Sample a Catmull-Rom spline; the file's first two lines are the
    /// boundary tangents.
    Spline {
        /// Path to the tangents + control points file.
        #[arg(short, long, default_value = "cpts_in.txt")]
        file: String,

        /// Parameter increment in (0, 1] per segment.
        #[arg(short = 'u', long, default_value_t = 0.09)]
        inc: f64,

        /// Radius for the control-point marker spheres.
        #[arg(short, long, default_value_t = 0.1)]
        radius: f64,
    },

    /// Mesh a bicubic Bezier patch from 16 control points.
    Patch {
        /// Path to the 16 control points.
        #[arg(short, long, default_value = "patchPoints.txt")]
        file: String,

        /// Number of samples along u (>= 2).
        #[arg(short = 'u', long, default_value_t = 11)]
        num_u: usize,

        /// Number of samples along v (>= 2).
        #[arg(short = 'v', long, default_value_t = 11)]
        num_v: usize,

        /// Radius for the control-point marker spheres.
        #[arg(short, long, default_value_t = 1.0)]
        radius: f64,

        #[command(flatten)]
        shading: Shading,
    },

    /// Mesh a superquadric ellipsoid.
    Ellipsoid {
        /// Number of longitude samples (>= 2).
        #[arg(short = 'u', long, default_value_t = 19)]
        num_u: usize,

        /// Number of latitude samples (>= 2).
        #[arg(short = 'v', long, default_value_t = 9)]
        num_v: usize,

        /// North-south shape exponent.
        #[arg(short = 'r', long, default_value_t = 1.0)]
        s1: f64,

        /// East-west shape exponent.
        #[arg(short = 't', long, default_value_t = 1.0)]
        s2: f64,

        /// Semi-axis scale along x.
        #[arg(short = 'A', default_value_t = 1.0)]
        a: f64,

        /// Semi-axis scale along y.
        #[arg(short = 'B', default_value_t = 1.0)]
        b: f64,

        /// Semi-axis scale along z.
        #[arg(short = 'C', default_value_t = 1.0)]
        c: f64,

        #[command(flatten)]
        shading: Shading,
    },

    /// Draw the three-link robot arm scene hierarchy.
    Arm {
        /// First joint angle (degrees, about Z).
        #[arg(short = 't', long, default_value_t = -51.0)]
        theta1: f64,

        /// Second joint angle (degrees, about Y).
        #[arg(short = 'u', long, default_value_t = 39.0)]
        theta2: f64,

        /// Third joint angle (degrees, about Y).
        #[arg(short = 'v', long, default_value_t = 65.0)]
        theta3: f64,

        /// First link length.
        #[arg(short = 'l', long, default_value_t = 4.0)]
        l1: f64,

        /// Second link length.
        #[arg(short = 'm', long, default_value_t = 3.0)]
        l2: f64,

        /// Third link length.
        #[arg(short = 'n', long, default_value_t = 2.5)]
        l3: f64,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Curve { file, inc, radius } => run_curve(&file, inc, radius),
        Commands::Spline { file, inc, radius } => run_spline(&file, inc, radius),
        Commands::Patch {
            file,
            num_u,
            num_v,
            radius,
            shading,
        } => run_patch(&file, num_u, num_v, radius, shading.smooth),
        Commands::Ellipsoid {
            num_u,
            num_v,
            s1,
            s2,
            a,
            b,
            c,
            shading,
        } => run_ellipsoid(num_u, num_v, Sellipsoid::new(s1, s2, a, b, c), shading.smooth),
        Commands::Arm {
            theta1,
            theta2,
            theta3,
            l1,
            l2,
            l3,
        } => run_arm([theta1, theta2, theta3], [l1, l2, l3]),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn check_increment(inc: f64) -> Result<()> {
    if !(inc > 0.0 && inc <= 1.0) {
        return Err(Error::InvalidArguments(format!(
            "increment must be in (0, 1], got {inc}"
        )));
    }
    Ok(())
}

fn check_resolution(num_u: usize, num_v: usize) -> Result<()> {
    if num_u < 2 || num_v < 2 {
        return Err(Error::InvalidArguments(format!(
            "grid resolution must be at least 2x2, got {num_u}x{num_v}"
        )));
    }
    Ok(())
}

fn open(file: &str) -> Result<BufReader<File>> {
    Ok(BufReader::new(File::open(file)?))
}

fn run_curve(file: &str, inc: f64, radius: f64) -> Result<()> {
    check_increment(inc)?;

    let ctrl = points_io::read_points(open(file)?)?;
    if ctrl.len() < 2 {
        return Err(Error::InvalidFormat(format!(
            "a Bezier curve needs at least 2 control points, got {}",
            ctrl.len()
        )));
    }

    let curve = BezierCurve::from_control_points(ctrl);
    let poly = curve.polyline(inc);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    scene::write_header(&mut out)?;
    scene::write_point_spheres(&mut out, curve.control_points(), radius)?;
    scene::write_polyline(&mut out, &poly)?;
    Ok(())
}

fn run_spline(file: &str, inc: f64, radius: f64) -> Result<()> {
    check_increment(inc)?;

    let (t0, t_n, ctrl) = points_io::read_tangents_and_points(open(file)?)?;
    if ctrl.len() < 2 {
        return Err(Error::InvalidFormat(format!(
            "a Catmull-Rom spline needs at least 2 control points, got {}",
            ctrl.len()
        )));
    }

    let spline = CatmullRom::new(ctrl, t0, t_n);
    let poly = spline.polyline(inc);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    scene::write_header(&mut out)?;
    scene::write_point_spheres(&mut out, spline.control_points(), radius)?;
    scene::write_polyline(&mut out, &poly)?;
    Ok(())
}

fn run_patch(file: &str, num_u: usize, num_v: usize, radius: f64, smooth: bool) -> Result<()> {
    check_resolution(num_u, num_v)?;

    let ctrl = points_io::read_points(open(file)?)?;
    let patch = BezierPatch::from_points(&ctrl).ok_or_else(|| {
        Error::InvalidFormat(format!(
            "a bicubic Bezier patch needs exactly 16 control points, got {}",
            ctrl.len()
        ))
    })?;

    let mut mesh = Mesh::new();
    patch.mesh_points(&mut mesh, num_u, num_v);
    mesh.triangulate_grid();
    if smooth {
        patch.mesh_normals(&mut mesh);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    scene::write_header(&mut out)?;
    scene::write_point_spheres(&mut out, patch.control_points(), radius)?;
    scene::write_mesh(&mut out, &mesh)?;
    Ok(())
}

fn run_ellipsoid(num_u: usize, num_v: usize, shape: Sellipsoid, smooth: bool) -> Result<()> {
    check_resolution(num_u, num_v)?;

    let mut mesh = Mesh::new();
    shape.mesh_points(&mut mesh, num_u, num_v);
    mesh.triangulate_closed();
    if smooth {
        shape.mesh_normals(&mut mesh);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    scene::write_header(&mut out)?;
    scene::write_mesh(&mut out, &mesh)?;
    Ok(())
}

/// Builds `translation * rotation` the way each arm link hangs off its
/// parent: lifted to the top of the previous link, then rotated about the
/// joint axis.
fn joint(lift: f64, rotation: Matrix) -> Matrix {
    let mut from_parent = Matrix::new(4, 4);
    from_parent.multiply(&transforms::translation(0.0, 0.0, lift), &rotation);
    from_parent
}

fn run_arm(thetas_deg: [f64; 3], lengths: [f64; 3]) -> Result<()> {
    let [theta1, theta2, theta3] = thetas_deg.map(to_rad);
    let [l1, l2, l3] = lengths;

    let base_plate = Cuboid::new(Point3::new(-2.0, -2.0, 0.0), Point3::new(2.0, 2.0, 1.0));
    let link = |len: f64| Cuboid::new(Point3::new(-0.5, -0.5, 0.0), Point3::new(0.5, 0.5, len));

    // Base marker at the origin, then the plate, then the three links,
    // each lifted to the top of its parent, with the end-effector marker
    // at the tip.
    let mut root = SceneNode::new(
        Box::new(PointMarker::new(0.0, 0.0, 0.0, 0.2)),
        transforms::translation(0.0, 0.0, 0.0),
    );
    let mut node = root.set_child(SceneNode::new(
        Box::new(CuboidFrame::new(base_plate)),
        joint(0.0, transforms::rotation_x(0.0)),
    ));
    node = node.set_child(SceneNode::new(
        Box::new(CuboidFrame::new(link(l1))),
        joint(1.0, transforms::rotation_z(theta1)),
    ));
    node = node.set_child(SceneNode::new(
        Box::new(CuboidFrame::new(link(l2))),
        joint(l1, transforms::rotation_y(theta2)),
    ));
    node = node.set_child(SceneNode::new(
        Box::new(CuboidFrame::new(link(l3))),
        joint(l2, transforms::rotation_y(theta3)),
    ));
    node.set_child(SceneNode::new(
        Box::new(PointMarker::new(0.0, 0.0, 0.0, 0.2)),
        transforms::translation(0.0, 0.0, l3),
    ));

    let stdout = io::stdout();
    let mut out = stdout.lock();
    scene::write_header(&mut out)?;
    root.draw(&Matrix::identity4(), &mut out)?;
    out.flush()?;
    Ok(())
}
