use criterion::{criterion_group, criterion_main, Criterion};
use std::sync::Arc;

use service::credentials::Argon2PasswordEncoder;
use service::store::MemoryStore;
use service::test_support::user_draft;
use service::user::domain::{PasswordChange, UserPatch};
use service::user::UserService;

fn bench_users(c: &mut Criterion) {
    let svc = UserService::new(Arc::new(MemoryStore::new()), Arc::new(Argon2PasswordEncoder::default()));

    // seed outside of the measured loop
    let rt = tokio::runtime::Runtime::new().unwrap();
    let user = rt.block_on(svc.create(user_draft("bench", "bench@example.com"))).unwrap();

    c.bench_function("user_update_profile", |b| {
        b.iter(|| {
            let patch = UserPatch { first_name: Some("Bench".into()), ..Default::default() };
            rt.block_on(svc.update(user.id, patch)).unwrap();
        });
    });

    c.bench_function("user_password_change_verify", |b| {
        b.iter(|| {
            let change = PasswordChange { old_password: "Passw0rd".into(), new_password: "Passw0rd".into() };
            rt.block_on(svc.update_password(user.id, change)).unwrap();
        });
    });
}

criterion_group!(benches, bench_users);
criterion_main!(benches);
