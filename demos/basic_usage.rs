//! Basic create -> mutate -> query flow.

use dualgraph::*;

fn main() -> GraphResult<()> {
    // Undirected, unweighted, simple graph with spreadsheet-style naming
    let mut graph = Graph::new(GraphKind::default(), String::new(), naming::letters());

    // Auto-named nodes: A, B, C
    let a = graph.add_node(Point::new(0, 0))?;
    let b = graph.add_node(Point::new(3, 4))?;
    let c = graph.add_node(Point::new(10, 10))?;

    graph.add_edge(a, b)?;
    graph.add_edge(b, c)?;

    println!("Graph created with {} nodes", graph.node_count());
    println!("{}\n", graph.render_matrix());

    // Nearest-point lookup
    if let Some(hit) = graph.closest_node(Point::new(1, 1)) {
        println!(
            "Closest node to (1, 1): {} ({})",
            hit,
            graph.node(hit).expect("hit is live").value()
        );
    }

    // Neighbors of B
    print!("Neighbors of {}:", graph.node(b).expect("b is live").value());
    for edge in graph.neighbors(b)? {
        print!(" {}", graph.node(edge.target).expect("target is live").value());
    }
    println!();

    // Remove B and show the log
    graph.remove_node(b)?;
    println!("\nAfter removing B:\n{}", graph.render_matrix());

    println!("\nOperation log:");
    for entry in graph.log() {
        println!("  {}", entry);
    }

    Ok(())
}
