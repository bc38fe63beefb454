use crate::aa::{Extension, Framework};

/// Computes the grounded extension of a framework as the least fixed point of its characteristic function.
///
/// Unlike the enumeration performed by a [`SemanticsEngine`](crate::semantics::SemanticsEngine),
/// this computation takes a time linear in the size of the framework.
pub fn grounded_fixpoint(af: &Framework) -> Extension<'_> {
    let mut ext = vec![];
    let mut n_processed_args = 0;
    let mut defeated_args = vec![false; af.n_arguments()];
    let mut attacked_by = af
        .iter_arguments()
        .map(|arg| {
            let n = af.iter_attacks_to(arg).count();
            if n == 0 {
                ext.push(arg)
            }
            n
        })
        .collect::<Vec<usize>>();
    while n_processed_args < ext.len() {
        let arg = ext[n_processed_args];
        for defeating_att in af.iter_attacks_from(arg) {
            let defeated = defeating_att.attacked();
            if defeated_args[defeated.id()] {
                continue;
            }
            defeated_args[defeated.id()] = true;
            for att in af.iter_attacks_from(defeated) {
                let attacked = att.attacked();
                if attacked_by[attacked.id()] == 1 {
                    ext.push(attacked)
                } else {
                    attacked_by[attacked.id()] -= 1;
                }
            }
        }
        n_processed_args += 1;
    }
    Extension::from_ids(af, ext.iter().map(|a| a.id()))
}
