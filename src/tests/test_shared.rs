use std::thread;

use super::sample_blocks;
use crate::{Error, MerkleTree, SharedMerkleTree};

#[test]
fn test_shared_reads_match_direct_reads() {
    let blocks = sample_blocks(6);
    let tree = MerkleTree::build(&blocks, 2).expect("build");
    let root = tree.root_hash();
    let direct = tree.prove(3).expect("prove");

    let shared = SharedMerkleTree::new(tree);
    assert_eq!(shared.root_hash().expect("root"), root);
    assert_eq!(shared.prove(3).expect("prove"), direct);
    assert_eq!(
        shared
            .prove_first_matching(|payload| payload == b"Data")
            .expect("prove")
            .leaf_index(),
        3
    );
    assert_eq!(
        shared.read(|tree| tree.leaf_count()).expect("read"),
        blocks.len()
    );
}

#[test]
fn test_concurrent_readers_agree() {
    let blocks = sample_blocks(16);
    let tree = MerkleTree::build(&blocks, 3).expect("build");
    let expected_root = tree.root_hash();
    let expected_proofs: Vec<_> = (0..blocks.len())
        .map(|index| tree.prove(index).expect("prove"))
        .collect();

    let shared = SharedMerkleTree::new(tree);
    thread::scope(|scope| {
        for _ in 0..8 {
            let shared = shared.clone();
            let expected_proofs = &expected_proofs;
            scope.spawn(move || {
                for (index, expected) in expected_proofs.iter().enumerate() {
                    assert_eq!(shared.root_hash().expect("root"), expected_root);
                    assert_eq!(&shared.prove(index).expect("prove"), expected);
                }
            });
        }
    });
}

#[test]
fn test_write_swaps_the_tree_wholesale() {
    let shared = SharedMerkleTree::new(MerkleTree::build(&sample_blocks(2), 2).expect("build"));
    let replacement = MerkleTree::build(&sample_blocks(8), 4).expect("build replacement");
    let replacement_root = replacement.root_hash();

    let previous = shared
        .write(|tree| std::mem::replace(tree, replacement))
        .expect("write");
    assert_eq!(previous.leaf_count(), 2);
    assert_eq!(shared.root_hash().expect("root"), replacement_root);

    shared.destroy();
    assert_eq!(
        shared.write(|tree| tree.leaf_count()),
        Err(Error::TreeDestroyed)
    );
}

#[test]
fn test_destroy_blocks_out_subsequent_reads() {
    let tree = MerkleTree::build(&sample_blocks(4), 2).expect("build");
    let shared = SharedMerkleTree::new(tree);

    assert!(!shared.is_destroyed());
    shared.destroy();
    assert!(shared.is_destroyed());

    assert_eq!(shared.root_hash(), Err(Error::TreeDestroyed));
    assert_eq!(shared.prove(0), Err(Error::TreeDestroyed));
    assert_eq!(
        shared.read(|tree| tree.leaf_count()),
        Err(Error::TreeDestroyed)
    );
}

#[test]
fn test_destroy_twice_is_a_no_op() {
    let tree = MerkleTree::build(&sample_blocks(2), 2).expect("build");
    let shared = SharedMerkleTree::new(tree);
    shared.destroy();
    shared.destroy();
    assert!(shared.is_destroyed());
}

#[test]
fn test_destroy_is_visible_through_clones() {
    let tree = MerkleTree::build(&sample_blocks(2), 2).expect("build");
    let shared = SharedMerkleTree::new(tree);
    let other = shared.clone();

    other.destroy();
    assert!(shared.is_destroyed());
    assert_eq!(shared.root_hash(), Err(Error::TreeDestroyed));
}

#[test]
fn test_readers_race_destroyer() {
    let blocks = sample_blocks(8);
    let tree = MerkleTree::build(&blocks, 2).expect("build");
    let expected_root = tree.root_hash();
    let shared = SharedMerkleTree::new(tree);

    thread::scope(|scope| {
        for _ in 0..4 {
            let shared = shared.clone();
            let blocks = &blocks;
            scope.spawn(move || {
                // Every read either sees the intact tree or the tombstone;
                // never anything in between.
                for index in 0..blocks.len() {
                    match shared.prove(index) {
                        Ok(proof) => {
                            assert!(proof
                                .verify(&expected_root, &blocks[index])
                                .expect("verify"));
                        }
                        Err(error) => assert_eq!(error, Error::TreeDestroyed),
                    }
                }
            });
        }
        let destroyer = shared.clone();
        scope.spawn(move || destroyer.destroy());
    });

    assert!(shared.is_destroyed());
}
