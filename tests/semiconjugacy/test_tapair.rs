use hybrid_systems::prelude::*;

use crate::theory::systems::{chain, threshold_system};

#[test]
fn test_tapair() {
    let anchor = chain(2);
    // the template carries an extra stationary coordinate the anchor does not see
    let temp = (&anchor | &threshold_system(1, &[vec![5.0]])).unwrap();
    let drop = MapLeaf::map("forget", |x: &[f64]| vec![x[0]]);
    let phase = Semiconjugacy::new(
        temp.clone(),
        anchor.clone(),
        vec![ModeId(0), ModeId(1)],
        vec![drop.clone(), drop],
    )
    .unwrap();

    let pair = TAPair::new(anchor.clone(), temp.clone(), phase.clone()).unwrap();
    assert_eq!(pair.anchor(), &anchor);
    assert_eq!(pair.temp(), &temp);
    assert_eq!(pair.asymptotic_phase(), &phase);
    assert_eq!(
        pair.asymptotic_phase().apply(ModeId(1), &[3.0, 4.0]).unwrap(),
        StateVector(vec![3.0])
    );
}

#[test]
fn test_tapair_rejects_phase_in_wrong_direction() {
    let anchor = chain(2);
    let temp = chain(2);
    let backwards = Semiconjugacy::identity(&anchor);

    assert_eq!(
        TAPair::new(anchor, temp, backwards).err(),
        Some(HybridError::PhaseMismatch)
    );
}
