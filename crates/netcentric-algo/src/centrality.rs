//! Closeness centrality via per-node BFS.

use std::collections::VecDeque;

use netcentric_graph::{Graph, NodeId};

/// Closeness centrality for every node of `graph`:
///
/// ```text
/// closeness(v) = (r - 1) / sum_over_reachable_u(dist(v, u))   if r > 1
///              = 0.0                                          if r == 1
/// ```
///
/// where `r` counts nodes reachable from `v` (including `v`) and `dist` is
/// the unweighted shortest-path hop count. This is the unnormalized variant
/// (networkx `wf_improved=False`): no rescaling by total graph size, so a
/// node in a small component of a fragmented graph scores against its own
/// component only. Callers score components independently for subnetwork
/// rows; the whole-graph call intentionally keeps the cross-component
/// unreachability. O(V·(V+E)).
///
/// Entries come back in graph node order, one per node.
pub fn closeness_centrality(graph: &Graph) -> Vec<(NodeId, f64)> {
    let n = graph.node_count();
    let mut scores = Vec::with_capacity(n);

    let mut dist = vec![-1i64; n];
    for s in 0..n {
        dist.iter_mut().for_each(|d| *d = -1);
        dist[s] = 0;
        let mut queue = VecDeque::from([s]);
        let mut total_dist = 0i64;
        let mut reachable = 1usize; // counts s itself

        while let Some(v) = queue.pop_front() {
            for &w in graph.neighbor_slots(v) {
                if dist[w] < 0 {
                    dist[w] = dist[v] + 1;
                    total_dist += dist[w];
                    reachable += 1;
                    queue.push_back(w);
                }
            }
        }

        let closeness = if reachable > 1 {
            (reachable - 1) as f64 / total_dist as f64
        } else {
            0.0
        };
        scores.push((graph.node_at(s).clone(), closeness));
    }
    scores
}

#[cfg(test)]
mod tests {
    use super::*;
    use netcentric_graph::RawNetwork;

    fn graph_of(links: &[(&str, &str)], lone: &[&str]) -> Graph {
        let mut raw = RawNetwork::new();
        for l in lone {
            raw.add_node(NodeId::from(*l));
        }
        for (a, b) in links {
            raw.add_link(NodeId::from(*a), NodeId::from(*b));
        }
        raw.into_undirected()
    }

    fn score_of(scores: &[(NodeId, f64)], id: &str) -> f64 {
        scores
            .iter()
            .find(|(n, _)| n.as_str() == id)
            .map(|(_, c)| *c)
            .unwrap()
    }

    #[test]
    fn single_node_scores_zero_by_convention() {
        let scores = closeness_centrality(&graph_of(&[], &["a"]));
        assert_eq!(scores.len(), 1);
        assert_eq!(scores[0].1, 0.0);
    }

    #[test]
    fn four_node_path_matches_hand_computation() {
        // a–b–c–d: ends reach 1+2+3=6, middles reach 1+1+2=4.
        let scores = closeness_centrality(&graph_of(&[("a", "b"), ("b", "c"), ("c", "d")], &[]));
        assert_eq!(score_of(&scores, "a"), 0.5);
        assert_eq!(score_of(&scores, "b"), 0.75);
        assert_eq!(score_of(&scores, "c"), 0.75);
        assert_eq!(score_of(&scores, "d"), 0.5);
    }

    #[test]
    fn disjoint_edges_all_score_one() {
        // Each node reaches exactly one other at distance 1: (2-1)/1 = 1.
        let scores = closeness_centrality(&graph_of(&[("a", "b"), ("c", "d")], &[]));
        assert!(scores.iter().all(|(_, c)| *c == 1.0));
    }

    #[test]
    fn star_center_scores_one() {
        let scores = closeness_centrality(&graph_of(&[("c", "x"), ("c", "y"), ("c", "z")], &[]));
        assert_eq!(score_of(&scores, "c"), 1.0);
        // Leaves: 1 + 2 + 2 = 5 hops to the 3 others.
        assert_eq!(score_of(&scores, "x"), 3.0 / 5.0);
    }

    #[test]
    fn connected_graph_scores_lie_in_unit_interval() {
        let scores = closeness_centrality(&graph_of(
            &[("a", "b"), ("b", "c"), ("c", "d"), ("d", "a"), ("a", "c")],
            &[],
        ));
        for (_, c) in scores {
            assert!(c > 0.0 && c <= 1.0, "closeness {c} out of (0, 1]");
        }
    }

    #[test]
    fn self_loop_does_not_change_distances() {
        let plain = closeness_centrality(&graph_of(&[("a", "b")], &[]));
        let looped = closeness_centrality(&graph_of(&[("a", "b"), ("a", "a")], &[]));
        assert_eq!(score_of(&plain, "a"), score_of(&looped, "a"));
        assert_eq!(score_of(&plain, "b"), score_of(&looped, "b"));
    }

    #[test]
    fn isolated_node_in_larger_graph_scores_zero() {
        let scores = closeness_centrality(&graph_of(&[("a", "b")], &["z"]));
        assert_eq!(score_of(&scores, "z"), 0.0);
    }
}
