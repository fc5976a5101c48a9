use super::*;

use crate::store::MemoryStore;

fn oracle_with_store() -> (TokenAuthOracle, Rc<MemoryStore>) {
    let store = Rc::new(MemoryStore::new());
    let oracle = TokenAuthOracle::new(Rc::clone(&store) as Rc<dyn CredentialStore>);
    (oracle, store)
}

#[test]
fn no_token_means_unauthenticated() {
    let (oracle, _store) = oracle_with_store();
    assert!(!oracle.is_authenticated());
}

#[test]
fn present_token_means_authenticated() {
    let (oracle, store) = oracle_with_store();
    store.set(AUTH_TOKEN_KEY, "bearer-xyz");
    assert!(oracle.is_authenticated());
}

#[test]
fn empty_token_does_not_authenticate() {
    let (oracle, store) = oracle_with_store();
    store.set(AUTH_TOKEN_KEY, "");
    assert!(!oracle.is_authenticated());
}

#[test]
fn oracle_observes_token_changes_between_calls() {
    let (oracle, store) = oracle_with_store();

    store.set(AUTH_TOKEN_KEY, "bearer-xyz");
    assert!(oracle.is_authenticated());

    store.remove(AUTH_TOKEN_KEY);
    assert!(!oracle.is_authenticated(), "answer must be recomputed, not cached");
}
