use depcell::{And, Const, Dep, Equal, If, IndexedSelect, Input, Membership, Not, Or, Result};
use mockall::predicate::eq;

use crate::history::History;
use crate::mock::SharedMock;

#[test]
fn and_of_three() -> Result<()> {
	let a = Input::new(false);
	let b = Input::new(false);
	let c = Input::new(false);
	let and = And::new([a.dep(), b.dep(), c.dep()]);
	let history = History::observe(&and.dep());

	assert!(!and.value());

	a.set(true)?;
	b.set(true)?;
	assert!(!and.value());
	assert_eq!(history.len(), 0);

	c.set(true)?;
	assert!(and.value());
	assert_eq!(history.joined(), "true");
	Ok(())
}

#[test]
fn or_and_not() -> Result<()> {
	let a = Input::new(false);
	let b = Input::new(false);
	let or = Or::of(a.clone(), b.clone());
	let none = Not::new(or.clone());
	let history = History::observe(&none.dep());

	assert!(!or.value());
	assert!(none.value());

	a.set(true)?;
	b.set(true)?;
	a.set(false)?;
	b.set(false)?;

	assert_eq!(history.joined(), "false|true");
	Ok(())
}

#[test]
fn boolean_functions_hold_for_every_permutation() -> Result<()> {
	let a = Input::new(false);
	let b = Input::new(false);
	let and = And::of(a.clone(), b.clone());
	let or = Or::of(a.clone(), b.clone());
	let not = Not::new(a.clone());

	for (x, y) in [(false, false), (false, true), (true, false), (true, true), (false, false)] {
		a.set(x)?;
		b.set(y)?;
		assert_eq!(and.value(), x && y);
		assert_eq!(or.value(), x || y);
		assert_eq!(not.value(), !x);
	}
	Ok(())
}

#[test]
fn empty_junctions() {
	let none: Vec<Dep<bool>> = Vec::new();

	assert!(And::new(none.clone()).value());
	assert!(!Or::new(none.clone()).value());
	assert!(And::new(none).is_empty());
}

#[test]
fn equal_tracks_both_sides() -> Result<()> {
	let left = Input::new(1);
	let right = Input::new(2);
	let equal = Equal::new(left.clone(), right.clone());
	let history = History::observe(&equal.dep());

	assert!(!equal.value());

	right.set(1)?;
	left.set(3)?;
	right.set(3)?;

	assert_eq!(history.joined(), "true|false|true");
	Ok(())
}

#[test]
fn if_follows_active_branch() -> Result<()> {
	let condition = Input::new(true);
	let then = Input::new(1);
	let otherwise = Input::new(2);
	let cond = If::new(condition.clone(), then.clone(), otherwise.clone());
	let history = History::observe(&cond.dep());

	assert_eq!(cond.value(), 1);

	condition.set(false)?;
	assert_eq!(cond.value(), 2);

	then.set(3)?;
	assert_eq!(cond.value(), 2);

	otherwise.set(4)?;
	assert_eq!(cond.value(), 4);

	condition.set(true)?;
	assert_eq!(cond.value(), 3);

	assert_eq!(history.joined(), "2|4|3");
	Ok(())
}

#[test]
fn if_inactive_branch_is_quiet() -> Result<()> {
	let condition = Input::new(true);
	let then = Input::new("on");
	let otherwise = Input::new("off");
	let cond = If::new(condition.clone(), then.clone(), otherwise.clone());

	let mock = SharedMock::new();
	let _watch = mock.watch(&cond.dep());

	mock.get().expect_trigger().times(0).return_const(());
	otherwise.set("idle")?;
	otherwise.set("sleeping")?;
	mock.get().checkpoint();

	mock.get()
		.expect_trigger()
		.with(eq(String::from("sleeping")))
		.times(1)
		.return_const(());
	condition.set(false)?;
	mock.get().checkpoint();
	Ok(())
}

#[test]
fn indexed_select() -> Result<()> {
	let a = Input::new(String::from("AAA"));
	let b = Input::new(String::from("BBB"));
	let c = Input::new(String::from("CCC"));
	let z = Input::new(String::from("ZZZ"));
	let index = Input::new(0);

	let select = IndexedSelect::new(index.clone(), [a.dep(), b.dep(), c.dep()], z.clone());
	let history = History::observe(&select.dep());

	assert_eq!(select.value(), "AAA");
	assert_eq!(select.len(), 3);

	index.set(1)?;
	assert_eq!(history.take(), "BBB");

	b.set(String::from("BBB2"))?;
	assert_eq!(history.take(), "BBB2");

	c.set(String::from("CCC3"))?;
	assert_eq!(history.take(), "");

	index.set(2)?;
	assert_eq!(history.take(), "CCC3");

	index.set(3)?;
	assert_eq!(history.take(), "ZZZ");

	z.set(String::from("ZZZ4"))?;
	assert_eq!(history.take(), "ZZZ4");
	Ok(())
}

#[test]
fn indexed_select_default_is_quiet_in_range() -> Result<()> {
	let index = Input::new(0);
	let fallback = Input::new(-1);
	let select = IndexedSelect::new(index.clone(), Const::array([10, 20]), fallback.clone());
	let history = History::observe(&select.dep());

	fallback.set(-2)?;
	assert_eq!(history.len(), 0);

	index.set(-1)?;
	assert_eq!(select.value(), -2);

	index.set(7)?;
	fallback.set(-3)?;
	assert_eq!(history.joined(), "-2|-3");
	Ok(())
}

#[test]
fn membership() -> Result<()> {
	let value = Input::new("b");
	let member = Membership::new(value.clone(), ["a", "b"]);
	let history = History::observe(&member.dep());

	assert!(member.value());

	value.set("c")?;
	value.set("d")?;
	value.set("a")?;

	assert_eq!(history.joined(), "false|true");
	Ok(())
}

#[test]
fn constant_sources() {
	let cond = If::new(Dep::constant(false), Dep::constant("yes"), Dep::constant("no"));

	assert_eq!(cond.value(), "no");
	assert!(cond.dep().has_source());
	assert!(!cond.dep().is_constant());
}

#[test]
fn diamond_propagation_is_not_batched() -> Result<()> {
	let root = Input::new(false);
	let left = Not::new(root.clone());
	let right = Not::new(root.clone());
	let same = Equal::new(left.clone(), right.clone());
	let history = History::observe(&same.dep());

	root.set(true)?;

	// `same` sees the left edge before the right one catches up.
	assert!(same.value());
	assert_eq!(history.joined(), "false|true");
	Ok(())
}
