use std::cell::Cell;
use std::rc::Rc;

use depcell::{Dep, If, Input, Lazy, Result};

#[test]
fn computes_once_until_invalidated() {
	let calls = Rc::new(Cell::new(0));
	let lazy = Lazy::new({
		let calls = calls.clone();
		move || {
			calls.set(calls.get() + 1);
			calls.get() * 100
		}
	});

	assert!(!lazy.is_valid());
	assert_eq!(calls.get(), 0);

	assert_eq!(lazy.value(), 100);
	assert_eq!(lazy.value(), 100);
	assert_eq!(calls.get(), 1);

	lazy.invalidate();
	lazy.invalidate();
	assert_eq!(calls.get(), 1);
	assert!(!lazy.is_valid());

	assert_eq!(lazy.value(), 200);
	assert_eq!(calls.get(), 2);
}

#[test]
fn reads_external_state() {
	let external = Rc::new(Cell::new(1));
	let lazy = depcell::lazy!((external) external.get() * 2);
	let dep: Dep<i32> = lazy.dep();

	external.set(5);
	assert_eq!(dep.value(), 10);

	external.set(6);
	assert_eq!(dep.value(), 10);

	lazy.invalidate();
	assert_eq!(dep.value(), 12);
	assert!(!dep.has_source());
	assert!(!dep.is_connected());
}

#[test]
fn serves_as_branch() -> Result<()> {
	let condition = Input::new(false);
	let cached = Lazy::named("cached", || String::from("computed"));
	let cond = If::new(condition.clone(), cached.clone(), Dep::constant(String::from("plain")));

	assert!(!cached.is_valid());
	assert_eq!(cond.value(), "plain");

	condition.set(true)?;
	assert!(cached.is_valid());
	assert_eq!(cond.value(), "computed");
	Ok(())
}

#[test]
fn panicking_callback_leaves_cache_empty() {
	let fail = Rc::new(Cell::new(true));
	let lazy = Lazy::new({
		let fail = fail.clone();
		move || {
			if fail.get() {
				panic!("not ready");
			}
			1
		}
	});

	let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| lazy.value()));
	assert!(result.is_err());
	assert!(!lazy.is_valid());

	fail.set(false);
	assert_eq!(lazy.value(), 1);
}
