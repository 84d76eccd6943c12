use super::*;

const G: ResourceId = ResourceId(0);

fn offer(id: usize, from: (usize, u64), to: (usize, u64)) -> Offer {
    Offer::new(
        OfferId(id),
        End::new(ResourceId(from.0), from.1),
        End::new(ResourceId(to.0), to.1),
        G,
    )
}

fn graph(n: usize, offers: &[Offer]) -> Graph {
    let mut g = Graph::with_resources(n, G);
    for &o in offers {
        g.add(o);
    }
    g
}

#[test]
fn add_indexes_both_directions_in_insertion_order() {
    let g = graph(
        3,
        &[
            offer(0, (0, 2), (1, 1)),
            offer(1, (0, 5), (2, 1)),
            offer(2, (1, 1), (0, 5)),
        ],
    );
    let out: Vec<_> = g.outgoing(G).iter().map(|o| o.id).collect();
    assert_eq!(out, vec![OfferId(0), OfferId(1)]);
    let inc: Vec<_> = g.incoming(G).iter().map(|o| o.id).collect();
    assert_eq!(inc, vec![OfferId(2)]);
    assert_eq!(g.incoming(ResourceId(1))[0].id, OfferId(0));
    assert_eq!(g.offer_id_bound(), 3);
    assert_eq!(g.offer(OfferId(1)).unwrap().to.res, ResourceId(2));
    assert!(g.offer(OfferId(7)).is_none());
}

#[test]
fn offers_paying_out_currency_are_single_use() {
    let g = graph(
        2,
        &[offer(0, (0, 2), (1, 1)), offer(1, (1, 1), (0, 5))],
    );
    assert_eq!(g.offer(OfferId(0)).unwrap().class, UseClass::Repeatable);
    assert_eq!(g.offer(OfferId(1)).unwrap().class, UseClass::SingleUse);
    assert_eq!(g.single_use_count(), 1);
}

#[test]
#[should_panic(expected = "outside")]
fn add_out_of_range_panics() {
    let mut g = Graph::with_resources(2, G);
    g.add(offer(0, (0, 1), (5, 1)));
}

#[test]
#[should_panic(expected = "added twice")]
fn add_duplicate_id_panics() {
    let mut g = Graph::with_resources(2, G);
    g.add(offer(0, (0, 1), (1, 1)));
    g.add(offer(0, (1, 1), (0, 1)));
}

#[test]
fn topological_order_eliminates_sinks_first() {
    // 1 -> 2 -> 3, 1 -> 3, currency isolated.
    let g = graph(
        4,
        &[
            offer(0, (1, 1), (2, 1)),
            offer(1, (2, 1), (3, 1)),
            offer(2, (1, 1), (3, 1)),
        ],
    );
    let order: Vec<usize> = g.topological_order().into_iter().map(|r| r.0).collect();
    assert_eq!(order, vec![3, 2, 1, 0]);
}

#[test]
fn topological_order_omits_cycles() {
    // 0 <-> 1 is a cycle; 3 -> 2 is acyclic.
    let g = graph(
        4,
        &[
            offer(0, (0, 1), (1, 1)),
            offer(1, (1, 1), (0, 1)),
            offer(2, (3, 1), (2, 1)),
        ],
    );
    let order: Vec<usize> = g.topological_order().into_iter().map(|r| r.0).collect();
    assert_eq!(order, vec![2, 3]);
}

#[test]
fn transpose_swaps_endpoints_and_indices() {
    let g = graph(
        3,
        &[offer(0, (0, 2), (1, 1)), offer(1, (1, 1), (0, 5))],
    );
    let t = g.transpose();
    let o0 = t.offer(OfferId(0)).unwrap();
    assert_eq!((o0.from, o0.to), (End::new(ResourceId(1), 1), End::new(G, 2)));
    assert_eq!(o0.class, UseClass::Repeatable);
    assert_eq!(t.offer(OfferId(1)).unwrap().class, UseClass::SingleUse);
    let out_g: Vec<_> = t.outgoing(G).iter().map(|o| (o.id, o.to.res)).collect();
    assert_eq!(out_g, vec![(OfferId(1), ResourceId(1))]);
    let in_g: Vec<_> = t.incoming(G).iter().map(|o| (o.id, o.from.res)).collect();
    assert_eq!(in_g, vec![(OfferId(0), ResourceId(1))]);
    // Transposing twice gives the original adjacency back.
    let tt = t.transpose();
    assert_eq!(tt.outgoing(G), g.outgoing(G));
    assert_eq!(tt.incoming(ResourceId(1)), g.incoming(ResourceId(1)));
}

#[test]
fn multiplicative_path_prefers_low_cost_then_low_modulus() {
    // A=1, B=2, C=3, D=4, E=5 (unreachable).
    let g = graph(
        6,
        &[
            offer(0, (0, 2), (1, 1)), // g -> A, x2
            offer(1, (1, 3), (2, 1)), // A -> B, x3  => B = 6
            offer(2, (0, 7), (2, 1)), // g -> B, x7
            offer(3, (0, 4), (3, 1)), // g -> C, x4 (modulus 4)
            offer(4, (0, 2), (4, 1)), // g -> D, x2
            offer(5, (4, 2), (3, 1)), // D -> C, x2 => C = 4 (modulus 2)
        ],
    );
    let costs = g.shortest_multiplicative_path(G);
    assert_eq!(costs[0], Some(PathCost::ROOT));
    assert_eq!(costs[1], Some(PathCost { cost: 2, modulus: 2 }));
    assert_eq!(costs[2], Some(PathCost { cost: 6, modulus: 3 }));
    assert_eq!(costs[3], Some(PathCost { cost: 4, modulus: 2 }));
    assert_eq!(costs[5], None);
}

#[test]
fn multiplicative_path_saturates() {
    let g = graph(
        3,
        &[offer(0, (0, u64::MAX), (1, 1)), offer(1, (1, 3), (2, 1))],
    );
    let costs = g.shortest_multiplicative_path(G);
    assert_eq!(costs[2].unwrap().cost, u64::MAX);
}
