#[cfg(test)]
#[allow(clippy::unwrap_used, unused_results)]
mod tests {
    use crate::community::{partition, LeadingEigenvector, RecursivePartitioner};
    use crate::graph::GraphHandle;
    use crate::modularity::{modularity_matrix, submodularity_matrix, MatrixStorage};
    use crate::spectral::{Bisection, SpectralBisector};
    use crate::{Error, Result};
    use petgraph::graph::{NodeIndex, UnGraph};
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    fn graph_from_edges(n: usize, edges: &[(usize, usize)]) -> UnGraph<usize, ()> {
        let mut graph = UnGraph::<usize, ()>::new_undirected();
        for i in 0..n {
            graph.add_node(i);
        }
        for &(i, j) in edges {
            graph.add_edge(NodeIndex::new(i), NodeIndex::new(j), ());
        }
        graph
    }

    fn complete(n: usize) -> Vec<(usize, usize)> {
        (0..n)
            .flat_map(|i| ((i + 1)..n).map(move |j| (i, j)))
            .collect()
    }

    fn storages() -> Vec<MatrixStorage> {
        let mut all = vec![MatrixStorage::Dense];
        #[cfg(feature = "sparse")]
        all.push(MatrixStorage::Sparse);
        all
    }

    fn zachary_karate_club() -> UnGraph<usize, ()> {
        let edges = [
            (0, 1), (0, 2), (0, 3), (0, 4), (0, 5), (0, 6), (0, 7), (0, 8), (0, 10),
            (0, 11), (0, 12), (0, 13), (0, 17), (0, 19), (0, 21), (0, 31), (1, 2),
            (1, 3), (1, 7), (1, 13), (1, 17), (1, 19), (1, 21), (1, 30), (2, 3),
            (2, 7), (2, 8), (2, 9), (2, 13), (2, 27), (2, 28), (2, 32), (3, 7),
            (3, 12), (3, 13), (4, 6), (4, 10), (5, 6), (5, 10), (5, 16), (6, 16),
            (8, 30), (8, 32), (8, 33), (9, 33), (13, 33), (14, 32), (14, 33),
            (15, 32), (15, 33), (18, 32), (18, 33), (19, 33), (20, 32), (20, 33),
            (22, 32), (22, 33), (23, 25), (23, 27), (23, 29), (23, 32), (23, 33),
            (24, 25), (24, 27), (24, 31), (25, 31), (26, 29), (26, 33), (27, 33),
            (28, 31), (28, 33), (29, 32), (29, 33), (30, 32), (30, 33), (31, 32),
            (31, 33), (32, 33),
        ];
        graph_from_edges(34, &edges)
    }

    #[test]
    fn two_disconnected_cliques_give_two_communities() -> Result<()> {
        let mut edges = complete(4);
        edges.extend(complete(4).into_iter().map(|(i, j)| (i + 4, j + 4)));
        let graph = graph_from_edges(8, &edges);

        for storage in storages() {
            let a = LeadingEigenvector::new().with_storage(storage).partition(&graph)?;
            assert_eq!(a.num_communities(), 2);
            let labels = a.labels();
            assert!(labels[..4].iter().all(|&l| l == labels[0]));
            assert!(labels[4..].iter().all(|&l| l == labels[4]));
            assert_ne!(labels[0], labels[4]);
            assert!((a.modularity() - 0.5).abs() < 1e-10);
        }
        Ok(())
    }

    #[test]
    fn single_node_without_edges_is_degenerate() {
        let graph = graph_from_edges(1, &[]);
        assert_eq!(partition(&graph).unwrap_err(), Error::NoEdges);
    }

    #[test]
    fn complete_graph_is_indivisible() -> Result<()> {
        let n = 7;
        let handle = GraphHandle::from_edges(n, &complete(n)).unwrap();
        let b = modularity_matrix(&handle, MatrixStorage::Dense)?;
        let all: Vec<usize> = (0..n).collect();
        let b_g = submodularity_matrix(&b, None)?;
        assert_eq!(SpectralBisector::new().bisect(&b_g, &all)?, Bisection::Indivisible);

        let a = partition(&graph_from_edges(n, &complete(n)))?;
        assert_eq!(a.num_communities(), 1);
        assert_eq!(a.splits(), 0);
        assert!(a.labels().iter().all(|&l| l == 0));
        Ok(())
    }

    #[test]
    fn repeated_runs_give_identical_labels() -> Result<()> {
        let graph = zachary_karate_club();
        let first = partition(&graph)?;
        let second = partition(&graph)?;
        assert_eq!(first.labels(), second.labels());
        Ok(())
    }

    #[test]
    fn karate_club_matches_newman() -> Result<()> {
        let graph = zachary_karate_club();
        let a = partition(&graph)?;
        assert_eq!(a.num_communities(), 4);
        assert_eq!(a.splits(), 3);
        // Newman (2006) reports Q = 0.393 for this division
        assert!((a.modularity() - 0.3934).abs() < 1e-3, "Q = {}", a.modularity());
        // instructor and administrator end up apart
        assert_ne!(a.label(NodeIndex::new(0)), a.label(NodeIndex::new(33)));
        Ok(())
    }

    #[test]
    fn karate_club_keyed_by_original_ids() -> Result<()> {
        let graph = zachary_karate_club();
        let a = partition(&graph)?;
        let by_id = a.keyed_by_weight(&graph);
        assert_eq!(by_id.len(), 34);
        for (node, label) in a.iter() {
            assert_eq!(by_id[&node.index()], label);
        }
        Ok(())
    }

    #[test]
    fn accepted_split_raises_modularity_by_gain() -> Result<()> {
        let graph = zachary_karate_club();
        let handle = GraphHandle::from_graph(&graph);
        let m = handle.total_degree() as f64;
        let b = modularity_matrix(&handle, MatrixStorage::Dense)?;
        let bisector = SpectralBisector::new();
        let mut p = RecursivePartitioner::new(&b, &bisector);

        let mut before = crate::community::modularity(&graph, p.labels())?;
        while let Some(outcome) = p.step()? {
            let after = crate::community::modularity(&graph, p.labels())?;
            match outcome {
                Bisection::Split { gain, .. } => {
                    assert!(gain > 0.0);
                    assert!((after - before - gain / (2.0 * m)).abs() < 1e-9);
                }
                Bisection::Indivisible => assert!((after - before).abs() < 1e-12),
            }
            before = after;
        }
        Ok(())
    }

    #[cfg(feature = "sbm")]
    #[test]
    fn planted_blocks_are_recovered() -> Result<()> {
        use crate::sbm::StochasticBlockModel;

        let (graph, blocks) = StochasticBlockModel::new(30, 3)
            .with_probabilities(0.9, 0.0)
            .with_seed(42)
            .generate()?;
        let a = partition(&graph)?;
        assert_eq!(a.num_communities(), 3);
        for members in a.communities().values() {
            let planted: BTreeSet<usize> = members.iter().map(|v| blocks[v.index()]).collect();
            assert_eq!(planted.len(), 1);
        }
        Ok(())
    }

    fn arb_graph() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
        (2usize..14).prop_flat_map(|n| {
            (
                Just(n),
                proptest::collection::vec((0..n, 0..n), 1..40),
            )
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(48))]

        #[test]
        fn modularity_rows_sum_to_zero((n, edges) in arb_graph()) {
            let handle = GraphHandle::from_edges(n, &edges).unwrap();
            let b = modularity_matrix(&handle, MatrixStorage::Dense).unwrap();
            for i in 0..n {
                prop_assert!(b.row_sum(i).abs() < 1e-9);
            }
            prop_assert!(b.is_symmetric(1e-12));
        }

        #[test]
        fn generalized_matrix_is_symmetric(
            (n, edges) in arb_graph(),
            mask in proptest::collection::vec(any::<bool>(), 14),
        ) {
            let handle = GraphHandle::from_edges(n, &edges).unwrap();
            let subset: Vec<usize> = (0..n).filter(|&i| mask[i]).collect();
            let dense = modularity_matrix(&handle, MatrixStorage::Dense).unwrap();
            let reference = submodularity_matrix(&dense, Some(&subset)).unwrap();
            for storage in storages() {
                let b = modularity_matrix(&handle, storage).unwrap();
                let b_g = submodularity_matrix(&b, Some(&subset)).unwrap();
                prop_assert_eq!(b_g.dim(), subset.len());
                prop_assert!(b_g.is_symmetric(1e-12));
                for i in 0..subset.len() {
                    for j in 0..subset.len() {
                        prop_assert!((b_g.get(i, j) - reference.get(i, j)).abs() < 1e-12);
                    }
                }
            }
        }

        #[test]
        fn every_split_is_valid((n, edges) in arb_graph()) {
            let handle = GraphHandle::from_edges(n, &edges).unwrap();
            let b = modularity_matrix(&handle, MatrixStorage::Dense).unwrap();
            let bisector = SpectralBisector::new();
            let mut p = RecursivePartitioner::new(&b, &bisector);

            loop {
                let Some(&label) = p.queue().front() else { break };
                let subset = p.members(label);
                match p.step().unwrap() {
                    Some(Bisection::Split { first, second, gain, .. }) => {
                        prop_assert!(!first.is_empty());
                        prop_assert!(!second.is_empty());
                        prop_assert!(gain > 0.0);
                        let a: BTreeSet<usize> = first.iter().copied().collect();
                        let c: BTreeSet<usize> = second.iter().copied().collect();
                        prop_assert!(a.is_disjoint(&c));
                        let union: Vec<usize> = a.union(&c).copied().collect();
                        prop_assert_eq!(union, subset);
                    }
                    Some(Bisection::Indivisible) => {}
                    None => break,
                }
            }
            prop_assert!(p.splits() < n);
        }

        #[test]
        fn partition_covers_every_node_once((n, edges) in arb_graph()) {
            let graph = graph_from_edges(n, &edges);
            let a = partition(&graph).unwrap();
            prop_assert_eq!(a.len(), n);
            prop_assert!(a.splits() < n);
            let covered: usize = a.communities().values().map(Vec::len).sum();
            prop_assert_eq!(covered, n);
            prop_assert_eq!(a.communities().len(), a.num_communities());
            prop_assert!(a.modularity() >= -1e-12);
        }

        #[test]
        fn partition_is_deterministic((n, edges) in arb_graph()) {
            let graph = graph_from_edges(n, &edges);
            let first = partition(&graph).unwrap();
            let second = partition(&graph).unwrap();
            prop_assert_eq!(first.labels(), second.labels());
        }
    }
}
