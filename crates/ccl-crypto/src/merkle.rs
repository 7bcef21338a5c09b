use ccl_types::Digest;

/// Leaf digest for one manifest entry.
///
/// Binds the repository-relative path to the file's content digest, so
/// renaming a file changes the root even when its bytes do not.
pub fn manifest_leaf(path: &str, content: &Digest) -> Digest {
    let mut hasher = blake3::Hasher::new();
    hasher.update(b"ccl-leaf-v1:");
    hasher.update(path.as_bytes());
    hasher.update(b"\n");
    hasher.update(content.to_hex().as_bytes());
    Digest::from_hash(*hasher.finalize().as_bytes())
}

/// Fold leaves into a binary Merkle root.
///
/// Leaves are paired in order; an odd node is hashed with itself. A single
/// leaf is its own root; an empty list has no root. Callers must supply
/// leaves in a deterministic order (the manifest sorts by path) for the root
/// to be reproducible.
pub fn merkle_root(leaves: &[Digest]) -> Option<Digest> {
    if leaves.is_empty() {
        return None;
    }
    let mut current = leaves.to_vec();
    while current.len() > 1 {
        let mut next = Vec::with_capacity(current.len().div_ceil(2));
        for pair in current.chunks(2) {
            let hash = if pair.len() == 2 {
                hash_pair(&pair[0], &pair[1])
            } else {
                hash_pair(&pair[0], &pair[0])
            };
            next.push(hash);
        }
        current = next;
    }
    Some(current[0])
}

fn hash_pair(left: &Digest, right: &Digest) -> Digest {
    let mut hasher = blake3::Hasher::new();
    hasher.update(b"ccl-merkle-v1:");
    hasher.update(left.as_bytes());
    hasher.update(right.as_bytes());
    Digest::from_hash(*hasher.finalize().as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(seed: u8) -> Digest {
        Digest::from_bytes(&[seed])
    }

    #[test]
    fn empty_list_has_no_root() {
        assert!(merkle_root(&[]).is_none());
    }

    #[test]
    fn single_leaf_is_root() {
        let l = leaf(1);
        assert_eq!(merkle_root(&[l]).unwrap(), l);
    }

    #[test]
    fn two_leaves_produce_parent() {
        let root = merkle_root(&[leaf(1), leaf(2)]).unwrap();
        assert_ne!(root, leaf(1));
        assert_ne!(root, leaf(2));
    }

    #[test]
    fn odd_leaf_count_folds() {
        let leaves: Vec<Digest> = (0..7).map(leaf).collect();
        assert!(merkle_root(&leaves).is_some());
    }

    #[test]
    fn root_is_deterministic() {
        let leaves: Vec<Digest> = (0..10).map(leaf).collect();
        assert_eq!(merkle_root(&leaves), merkle_root(&leaves));
    }

    #[test]
    fn root_depends_on_leaf_order() {
        let forward = merkle_root(&[leaf(1), leaf(2)]).unwrap();
        let reversed = merkle_root(&[leaf(2), leaf(1)]).unwrap();
        assert_ne!(forward, reversed);
    }

    #[test]
    fn manifest_leaf_binds_path_and_content() {
        let content = Digest::from_bytes(b"file bytes");
        let a = manifest_leaf("results/tables/h0_final.json", &content);
        let b = manifest_leaf("results/tables/renamed.json", &content);
        assert_ne!(a, b);
        assert_ne!(a, manifest_leaf("results/tables/h0_final.json", &Digest::from_bytes(b"other")));
    }

    #[test]
    fn any_changed_leaf_changes_root() {
        let mut leaves: Vec<Digest> = (0..4).map(leaf).collect();
        let original = merkle_root(&leaves).unwrap();
        leaves[2] = leaf(99);
        assert_ne!(merkle_root(&leaves).unwrap(), original);
    }
}
