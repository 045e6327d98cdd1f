mod cli;
mod soup;

use clap::Parser;
use trisoup::{Mesh, TriangleSoupMeshBuilder};

/// Log how far a finished mesh was consolidated.
fn report(mesh: &Mesh, soup_points: usize) {
    tracing::info!(
        name = mesh.name(),
        faces = mesh.num_faces(),
        soup_points,
        points = mesh.num_points(),
        "finalized mesh"
    );
    for (id, attr) in mesh.attributes().iter().enumerate() {
        tracing::info!(
            id,
            usage = ?attr.usage(),
            data_type = ?attr.data_type(),
            components = attr.num_components(),
            values = attr.num_values(),
            element_type = ?mesh.element_type(id),
            "attribute"
        );
    }
}

pub fn main() -> Result<(), trisoup::Error> {
    let cli = cli::Cli::parse();
    cli::initialize_tracing(&cli.log_filter, cli.log_format);

    let grid = soup::Grid::new(cli.grid.0, cli.grid.1);
    let mut builder = TriangleSoupMeshBuilder::new();
    grid.emit(&mut builder, cli.materials, cli.shading);
    let mesh = builder.finalize().map_err(|e| {
        tracing::error!(error = %e, "couldn't finalize triangle soup");
        e
    })?;
    report(&mesh, 3 * grid.num_faces());
    Ok(())
}
