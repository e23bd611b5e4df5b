use depcell::{And, If, Input, Not, Output, Result};

#[test]
fn dropping_a_chain_unsubscribes_it() {
	let leaf = Input::new(true);

	{
		let not = Not::new(leaf.clone());
		let _and = And::of(not.clone(), leaf.clone());
		assert!(leaf.dep().has_change_subscribers());
	}

	assert!(!leaf.dep().has_change_subscribers());
	assert!(!leaf.dep().is_connected());
}

#[test]
fn consumers_are_not_kept_alive() -> Result<()> {
	let output = Output::new(1);

	{
		let consumer = Input::new(0);
		consumer.set_source(Some(output.dep()))?;
		assert!(output.dep().has_consumers());
	}

	assert!(!output.dep().has_consumers());
	output.set(2)?;
	Ok(())
}

#[test]
fn detach_releases_consumer_link() -> Result<()> {
	let leaf = Input::new(1);
	let doubled = leaf.dep().map(|value| value * 2);
	let proxy = Input::new(0);

	proxy.set_source(Some(doubled.clone()))?;
	assert!(doubled.has_consumers());
	assert!(proxy.dep().is_connected());

	proxy.set_source(None)?;
	assert!(!doubled.has_consumers());
	assert!(!proxy.dep().is_connected());
	assert_eq!(proxy.value(), 2);
	Ok(())
}

#[test]
fn branches_stay_subscribed() -> Result<()> {
	let condition = Input::new(true);
	let then = Input::new(1);
	let otherwise = Input::new(2);
	let _cond = If::new(condition.clone(), then.clone(), otherwise.clone());

	condition.set(false)?;

	assert!(then.dep().has_change_subscribers());
	assert!(otherwise.dep().has_change_subscribers());
	assert!(!then.dep().has_consumers());
	Ok(())
}
