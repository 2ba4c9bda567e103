use eigensplit::{LeadingEigenvector, MatrixStorage, StochasticBlockModel};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Planted partition -> leading-eigenvector communities.
    //
    // Gated behind `required-features = ["std", "sbm", "sparse"]` in
    // `Cargo.toml`. Mirrors the parameter grid the block model is usually run
    // with: two densities, a small and a larger graph, two and five blocks.
    for p_in in [0.1, 0.5] {
        for n in [100, 1000] {
            for k in [2, 5] {
                let (graph, _blocks) = StochasticBlockModel::new(n, k)
                    .with_probabilities(p_in, 0.01)
                    .with_seed(17)
                    .generate()?;

                // Larger graphs are stored sparse; the eigensolver densifies either way.
                let storage = if n > 500 {
                    MatrixStorage::Sparse
                } else {
                    MatrixStorage::Dense
                };
                let assignment = LeadingEigenvector::new()
                    .with_storage(storage)
                    .partition(&graph)?;

                println!(
                    "p_in={p_in:<4} n={n:<5} k={k}: {} communities (Q = {:.4})",
                    assignment.num_communities(),
                    assignment.modularity()
                );
            }
        }
    }
    Ok(())
}
